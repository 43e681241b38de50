//! Receive-queue loop: a simulated UART interrupt pushes bytes, the main loop
//! drains them line by line.
//!
//! Run with: `cargo run -p bytering-core --example uart_loop`

use bytering_core::{ByteRing, CountingObserver};

const WIRE: &[u8] = b"AT+GMR\r\nAT+CWMODE=1\r\nAT+CIFSR\r\n";

fn main() {
    let mut storage = [0u8; 16];
    let mut rx = ByteRing::builder()
        .observer(CountingObserver::new())
        .build(&mut storage)
        .expect("16 bytes is a valid ring");

    let mut line = Vec::new();
    let mut chunk = [0u8; 8];
    let mut wire = WIRE;

    while !wire.is_empty() || !rx.is_empty() {
        // "Interrupt": the peripheral delivers up to 5 bytes per tick.
        let burst = wire.len().min(5);
        let taken = rx.write(&wire[..burst]);
        if taken < burst {
            println!("rx overrun: dropped {} byte(s)", burst - taken);
        }
        wire = &wire[burst..];

        // Main loop drains a few bytes per pass.
        let n = rx.read(&mut chunk);
        for &b in &chunk[..n] {
            if b == b'\n' {
                println!("line: {}", String::from_utf8_lossy(&line).trim_end());
                line.clear();
            } else {
                line.push(b);
            }
        }
    }

    let stats = rx.observer().expect("observer attached");
    println!(
        "{} writes ({} bytes), {} reads ({} bytes)",
        stats.writes, stats.bytes_written, stats.reads, stats.bytes_read
    );
}
