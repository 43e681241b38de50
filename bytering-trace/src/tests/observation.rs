extern crate std;

use bytecast::{BytesError, FromBytes, ToBytes};

use crate::{Observation, RECORD_CAPACITY, TraceRecord};

#[test]
fn small_fields_encode_to_six_bytes() {
    let obs = Observation::new(1, 0, 5);
    assert_eq!(
        obs.to_record().as_bytes(),
        &[0x08, 0x01, 0x10, 0x00, 0x18, 0x05]
    );
    assert_eq!(obs.encoded_len(), 6);
}

#[test]
fn multi_byte_fields() {
    let obs = Observation::new(300, 1_000, 128);
    assert_eq!(
        obs.to_record().as_bytes(),
        &[0x08, 0xAC, 0x02, 0x10, 0xE8, 0x07, 0x18, 0x80, 0x01]
    );
}

#[test]
fn widest_observation_fits_record() {
    let obs = Observation::new(u32::MAX, u64::MAX, u64::MAX);
    let record = obs.to_record();
    assert_eq!(record.len(), Observation::MAX_ENCODED_LEN);
    assert!(record.len() <= RECORD_CAPACITY);
    assert_eq!(record.decode(), Ok(obs));
}

#[test]
fn to_bytes_into_short_buffer() {
    let obs = Observation::new(1, 2, 3);
    let mut buf = [0u8; 4];
    assert_eq!(
        obs.to_bytes(&mut buf),
        Err(BytesError::BufferTooSmall {
            needed: 6,
            available: 4,
        })
    );
    assert_eq!(obs.byte_len(), Some(6));
}

#[test]
fn decode_accepts_any_field_order() {
    let bytes = [0x18, 0x07, 0x08, 0x02, 0x10, 0x09];
    let (obs, n) = Observation::from_bytes(&bytes).unwrap();
    assert_eq!(obs, Observation::new(2, 9, 7));
    assert_eq!(n, 6);
}

#[test]
fn decode_missing_field_is_zero() {
    let (obs, _) = Observation::from_bytes(&[0x18, 0x2A]).unwrap();
    assert_eq!(obs, Observation::new(0, 0, 42));
}

#[test]
fn decode_rejects_unknown_field() {
    let err = Observation::from_bytes(&[0x08, 0x01, 0x20, 0x01]).unwrap_err();
    assert!(matches!(err, BytesError::InvalidData { .. }));
}

#[test]
fn decode_rejects_non_varint_wire_type() {
    // Field 1, wire type 2 (length-delimited).
    let err = Observation::from_bytes(&[0x0A, 0x01, 0x00]).unwrap_err();
    assert_eq!(
        err,
        BytesError::InvalidData {
            message: "observation field is not a varint",
        }
    );
}

#[test]
fn decode_rejects_wide_tag() {
    let err = Observation::from_bytes(&[0x08, 0x80, 0x80, 0x80, 0x80, 0x10]).unwrap_err();
    assert_eq!(
        err,
        BytesError::InvalidData {
            message: "observation tag exceeds u32",
        }
    );
}

#[test]
fn decode_truncated() {
    assert!(matches!(
        Observation::from_bytes(&[]),
        Err(BytesError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        Observation::from_bytes(&[0x08]),
        Err(BytesError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        Observation::from_bytes(&[0x08, 0x81]),
        Err(BytesError::UnexpectedEof { .. })
    ));
}

#[test]
fn record_conversions() {
    let obs = Observation::new(4, 5, 6);
    let record = TraceRecord::from(obs);
    assert_eq!(record, obs.to_record());
    assert_eq!(record.as_ref(), record.as_bytes());
    assert!(!record.is_empty());
    assert_eq!(
        std::format!("{record:?}"),
        "TraceRecord([8, 4, 16, 5, 24, 6])"
    );
}
