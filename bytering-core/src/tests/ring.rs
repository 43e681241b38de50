extern crate std;

use std::{vec, vec::Vec};

use spout::Spout;

use crate::{ByteConsumer, ByteProducer, ByteRing, InitError, MAX_CAPACITY, RingInfo, WriteError};

fn pending(ring: &ByteRing<'_>) -> Vec<u8> {
    let (head, tail) = ring.as_slices();
    let mut out = head.to_vec();
    out.extend_from_slice(tail);
    out
}

#[test]
fn new_ring_is_empty() {
    let mut storage = [0u8; 8];
    let ring = ByteRing::new(&mut storage).unwrap();
    assert!(ring.is_valid());
    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(ring.count(), 0);
    assert_eq!(ring.capacity(), 8);
    assert_eq!(ring.free(), 8);
}

#[test]
fn init_rejects_empty_storage() {
    let mut storage: [u8; 0] = [];
    assert_eq!(
        ByteRing::new(&mut storage).unwrap_err(),
        InitError::ZeroCapacity
    );
}

#[test]
fn init_rejects_oversized_storage() {
    let mut storage = vec![0u8; MAX_CAPACITY + 1];
    assert_eq!(
        ByteRing::new(&mut storage).unwrap_err(),
        InitError::CapacityTooLarge {
            capacity: MAX_CAPACITY + 1,
            max: MAX_CAPACITY,
        }
    );
}

#[test]
fn init_accepts_max_capacity() {
    let mut storage = vec![0u8; MAX_CAPACITY];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    assert_eq!(ring.capacity(), MAX_CAPACITY);
    assert_eq!(ring.write(&vec![7u8; MAX_CAPACITY + 10]), MAX_CAPACITY);
    assert!(ring.is_full());
}

#[test]
fn failed_reinit_invalidates() {
    let mut good = [0u8; 4];
    let mut empty: [u8; 0] = [];
    let mut ring = ByteRing::new(&mut good).unwrap();
    ring.write(b"ab");

    assert!(ring.init(&mut empty).is_err());
    assert!(!ring.is_valid());
    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(ring.count(), 0);
    assert_eq!(ring.capacity(), 0);
    assert_eq!(ring.write(b"abc"), 0);
}

#[test]
fn reinit_resets_state() {
    let mut first = [0u8; 4];
    let mut second = [0u8; 6];
    let mut ring = ByteRing::new(&mut first).unwrap();
    ring.write(b"abc");

    ring.init(&mut second).unwrap();
    assert!(ring.is_empty());
    assert_eq!(ring.capacity(), 6);
    assert_eq!(ring.write_cursor(), 0);
}

#[test]
fn uninit_ring_safe_defaults() {
    let mut ring = ByteRing::uninit();
    let mut out = [0u8; 4];

    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(ring.count(), 0);
    assert_eq!(ring.capacity(), 0);
    assert_eq!(ring.free(), 0);
    assert_eq!(ring.write(b"abc"), 0);
    assert_eq!(ring.read(&mut out), 0);
    assert_eq!(ring.peek(&mut out), 0);
    assert_eq!(ring.skip(3), 0);
    assert_eq!(ring.write_within(0..0), 0);
    assert_eq!(ring.read_within(0, 1), 0);
    assert_eq!(ring.read_cursor(), 0);
    assert_eq!(ring.as_slices(), (&[][..], &[][..]));
    ring.clear();
    assert!(ring.is_empty());
}

#[test]
fn default_is_uninit() {
    let ring: ByteRing<'_> = ByteRing::default();
    assert!(!ring.is_valid());
    assert_eq!(ring.capacity(), 0);
}

#[test]
fn write_then_read() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();

    assert_eq!(ring.write(b"hello"), 5);
    assert_eq!(ring.count(), 5);
    assert_eq!(ring.free(), 3);

    let mut out = [0u8; 5];
    assert_eq!(ring.read(&mut out), 5);
    assert_eq!(&out, b"hello");
    assert!(ring.is_empty());
}

#[test]
fn full_storage_is_usable() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();

    assert_eq!(ring.write(b"abcdefghij"), 8);
    assert!(ring.is_full());
    assert_eq!(ring.free(), 0);
    assert_eq!(ring.write(b"x"), 0);

    let mut out = [0u8; 8];
    assert_eq!(ring.read(&mut out), 8);
    assert_eq!(&out, b"abcdefgh");
}

#[test]
fn wraparound_round_trip() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();

    assert_eq!(ring.write(&[10, 11, 12, 13, 14, 15, 16]), 7);
    let mut out = [0u8; 3];
    assert_eq!(ring.read(&mut out), 3);
    assert_eq!(out, [10, 11, 12]);

    assert_eq!(ring.write(&[21, 22, 23]), 3);
    assert_eq!(ring.write_cursor(), 2);
    assert_eq!(ring.read_cursor(), 3);

    let mut out = [0u8; 7];
    assert_eq!(ring.read(&mut out), 7);
    assert_eq!(out, [13, 14, 15, 16, 21, 22, 23]);
    assert!(ring.is_empty());
}

#[test]
fn zero_length_transfers() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"ab");

    assert_eq!(ring.write(&[]), 0);
    assert_eq!(ring.read(&mut []), 0);
    assert_eq!(ring.count(), 2);
}

#[test]
fn read_leaves_excess_destination_untouched() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"ab");

    let mut out = [b'-'; 5];
    assert_eq!(ring.read(&mut out), 2);
    assert_eq!(&out, b"ab---");
}

#[test]
fn read_from_empty() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    let mut out = [0u8; 4];
    assert_eq!(ring.read(&mut out), 0);
}

#[test]
fn clear_behaves_like_fresh() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abc");
    ring.read(&mut [0u8; 1]);

    ring.clear();
    assert!(ring.is_empty());
    assert_eq!(ring.write_cursor(), 0);
    assert_eq!(ring.write(b"wxyz"), 4);
    assert_eq!(pending(&ring), b"wxyz");
}

#[test]
fn clear_keeps_storage_bytes() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcd");
    ring.clear();
    assert_eq!(ring.storage(), b"abcd");
}

#[test]
fn queries_are_idempotent() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abc");

    for _ in 0..3 {
        assert_eq!(ring.count(), 3);
        assert_eq!(ring.capacity(), 8);
        assert!(!ring.is_empty());
        assert!(!ring.is_full());
    }
}

#[test]
fn peek_does_not_consume() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abc");

    let mut out = [0u8; 2];
    assert_eq!(ring.peek(&mut out), 2);
    assert_eq!(&out, b"ab");
    assert_eq!(ring.count(), 3);

    let mut out = [0u8; 3];
    assert_eq!(ring.read(&mut out), 3);
    assert_eq!(&out, b"abc");
}

#[test]
fn peek_across_wrap() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abc");
    ring.read(&mut [0u8; 2]);
    ring.write(b"def");

    let mut out = [0u8; 4];
    assert_eq!(ring.peek(&mut out), 4);
    assert_eq!(&out, b"cdef");
}

#[test]
fn as_slices_split_at_wrap() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcd");
    ring.read(&mut [0u8; 3]);
    ring.write(b"ef");

    let (head, tail) = ring.as_slices();
    assert_eq!(head, b"d");
    assert_eq!(tail, b"ef");
}

#[test]
fn skip_discards_oldest() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");

    assert_eq!(ring.skip(2), 2);
    assert_eq!(pending(&ring), b"cdef");
    assert_eq!(ring.skip(10), 4);
    assert!(ring.is_empty());
    assert_eq!(ring.skip(1), 0);
}

#[test]
fn write_within_duplicates_pending_bytes() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcd");

    assert_eq!(ring.write_within(0..4), 4);
    assert!(ring.is_full());
    assert_eq!(pending(&ring), b"abcdabcd");
}

#[test]
fn write_within_wrapping_destination() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");
    ring.read(&mut [0u8; 4]);

    assert_eq!(ring.write_within(2..6), 4);
    assert_eq!(pending(&ring), b"efcdef");
}

#[test]
fn write_within_orders_runs_to_preserve_source() {
    // The first destination run covers the second run's source.
    let mut storage = *b"01234567";
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");
    ring.read(&mut [0u8; 4]);

    assert_eq!(ring.write_within(4..8), 4);
    assert_eq!(pending(&ring), b"efef67");
    assert_eq!(ring.storage(), b"67cdefef");
}

#[test]
fn write_within_runs_clobber_each_other() {
    // Each destination run covers part of the other run's source.
    let mut storage = *b"01234567";
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");
    ring.read(&mut [0u8; 5]);

    assert_eq!(ring.write_within(1..7), 6);
    assert_eq!(pending(&ring), b"fbcdef6");
    assert_eq!(ring.storage(), b"def6efbc");
}

#[test]
fn write_within_truncates_to_free_space() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abc");

    assert_eq!(ring.write_within(0..3), 1);
    assert_eq!(pending(&ring), b"abca");
}

#[test]
fn write_within_out_of_bounds() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();

    assert_eq!(ring.write_within(6..10), 0);
    assert!(ring.is_empty());
}

#[test]
fn read_within_moves_to_offset() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"hello");

    assert_eq!(ring.read_within(5, 3), 3);
    assert_eq!(&ring.storage()[5..8], b"hel");
    assert_eq!(pending(&ring), b"lo");
}

#[test]
fn read_within_overlapping_destination() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");

    assert_eq!(ring.read_within(2, 4), 4);
    assert_eq!(&ring.storage()[..6], b"ababcd");
    assert_eq!(ring.count(), 2);
}

#[test]
fn read_within_wrapping_source() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcdef");
    ring.read(&mut [0u8; 5]);
    ring.write(b"ghi");

    // Pending "fghi" sits at 5..8 then 0..1.
    assert_eq!(ring.read_within(1, 4), 4);
    assert_eq!(&ring.storage()[1..5], b"fghi");
    assert!(ring.is_empty());
}

#[test]
fn read_within_out_of_bounds() {
    let mut storage = [0u8; 8];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcd");

    assert_eq!(ring.read_within(6, 3), 0);
    assert_eq!(ring.read_within(9, 1), 0);
    assert_eq!(ring.count(), 4);
}

#[test]
fn send_whole_item() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();

    assert_eq!(ring.send(&b"abc"[..]), Ok(()));
    assert_eq!(
        ring.send(&b"xy"[..]),
        Err(WriteError::Truncated {
            written: 1,
            requested: 2,
        })
    );
    assert_eq!(pending(&ring), b"abcx");
}

#[test]
fn trait_objects_drive_the_ring() {
    fn pump<P: ByteProducer, C: ByteConsumer>(tx: &mut P, rx: &mut C, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = [0u8; 3];
        let mut sent = 0;
        while out.len() < data.len() {
            sent += tx.write(&data[sent..]);
            let n = rx.read(&mut buf);
            out.extend_from_slice(&buf[..n]);
        }
        out
    }

    let mut storage = [0u8; 5];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    let data: Vec<u8> = (0..=255).collect();

    let mut out = Vec::new();
    let mut buf = [0u8; 3];
    let mut sent = 0;
    while out.len() < data.len() {
        sent += ByteProducer::write(&mut ring, &data[sent..]);
        let n = ByteConsumer::read(&mut ring, &mut buf);
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(out, data);

    let (mut tx, mut rx) = ring.split();
    assert_eq!(pump(&mut tx, &mut rx, b"split halves"), b"split halves");
}

#[test]
fn ring_info_defaults() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"abcd");

    let info: &dyn RingInfo = &ring;
    assert!(info.is_full());
    assert_eq!(info.free(), 0);
}

#[test]
fn debug_output() {
    let mut storage = [0u8; 4];
    let mut ring = ByteRing::new(&mut storage).unwrap();
    ring.write(b"ab");
    let text = std::format!("{ring:?}");
    assert!(text.contains("capacity: 4"));
    assert!(text.contains("count: 2"));
}
