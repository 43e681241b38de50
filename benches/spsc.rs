//! SPSC benchmarks - split halves on two threads.

use bytering::ByteRing;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::thread;

const STREAM: usize = 256 * 1024;

/// Stream bytes producer to consumer with varying ring sizes.
fn spsc_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_stream");
    let data = vec![0x3Cu8; STREAM];

    for capacity in [64usize, 1024, 16 * 1024] {
        group.throughput(Throughput::Bytes(STREAM as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut storage = vec![0u8; capacity];
                b.iter(|| black_box(spsc_run(&mut storage, &data, 128)))
            },
        );
    }
    group.finish();
}

fn spsc_run(storage: &mut [u8], data: &[u8], chunk: usize) -> usize {
    let mut ring = ByteRing::new(storage).unwrap();
    let (mut tx, mut rx) = ring.split();

    thread::scope(|s| {
        s.spawn(move || {
            let mut sent = 0;
            while sent < data.len() {
                let end = (sent + chunk).min(data.len());
                let n = tx.write(&data[sent..end]);
                if n == 0 {
                    std::hint::spin_loop();
                }
                sent += n;
            }
        });

        let mut got = 0;
        let mut buf = vec![0u8; chunk];
        while got < data.len() {
            let n = rx.read(&mut buf);
            if n == 0 {
                std::hint::spin_loop();
            }
            black_box(&buf[..n]);
            got += n;
        }
        got
    })
}

criterion_group!(benches, spsc_stream);
criterion_main!(benches);
