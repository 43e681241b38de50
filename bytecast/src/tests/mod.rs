extern crate std;


use crate::{ByteCursor, ByteReader, BytesError, FromBytes, ToBytes};

#[test]
fn test_u32_little_endian() {
    let mut buf = [0u8; 4];
    let value = 0x12345678u32;

    assert_eq!(value.to_bytes(&mut buf).unwrap(), 4);
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);

    let (v, n) = u32::from_bytes(&buf).unwrap();
    assert_eq!(v, value);
    assert_eq!(n, 4);
}

#[test]
fn test_u64_little_endian() {
    let mut buf = [0u8; 8];
    0x0102_0304_0506_0708u64.to_bytes(&mut buf).unwrap();
    assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_buffer_too_small() {
    let mut buf = [0u8; 3];
    assert_eq!(
        7u32.to_bytes(&mut buf),
        Err(BytesError::BufferTooSmall {
            needed: 4,
            available: 3
        })
    );
}

#[test]
fn test_unexpected_eof() {
    assert_eq!(
        u16::from_bytes(&[1]),
        Err(BytesError::UnexpectedEof {
            needed: 2,
            available: 1
        })
    );
}

#[test]
fn test_bool_invalid() {
    assert!(matches!(
        bool::from_bytes(&[2]),
        Err(BytesError::InvalidData { .. })
    ));
}

#[test]
fn test_byte_array_and_slice() {
    let mut buf = [0u8; 4];
    assert_eq!([9u8, 8, 7].to_bytes(&mut buf).unwrap(), 3);
    assert_eq!(buf, [9, 8, 7, 0]);

    let slice: &[u8] = &[1, 2, 3, 4, 5];
    assert!(slice.to_bytes(&mut buf).is_err());

    let (arr, n) = <[u8; 2]>::from_bytes(&buf).unwrap();
    assert_eq!(arr, [9, 8]);
    assert_eq!(n, 2);
}

#[test]
fn test_cursor_and_reader() {
    let mut buf = [0u8; 16];
    let mut cursor = ByteCursor::new(&mut buf);
    cursor.write(&0xABu8).unwrap();
    cursor.write(&0x1234u16).unwrap();
    cursor.write(&true).unwrap();
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.remaining(), 12);
    assert_eq!(cursor.written(), &[0xAB, 0x34, 0x12, 1]);

    let mut reader = ByteReader::new(&buf[..4]);
    assert_eq!(reader.read::<u8>().unwrap(), 0xAB);
    assert_eq!(reader.read::<u16>().unwrap(), 0x1234);
    assert!(reader.read::<bool>().unwrap());
    assert!(reader.is_empty());
    assert!(reader.read::<u8>().is_err());
}

#[test]
fn test_error_display() {
    use std::string::ToString;

    let err = BytesError::BufferTooSmall {
        needed: 8,
        available: 2,
    };
    assert_eq!(err.to_string(), "output holds 2 bytes, encoding needs 8");

    let err = BytesError::UnexpectedEof {
        needed: 4,
        available: 1,
    };
    assert_eq!(err.to_string(), "input ended after 1 bytes, value needs 4");

    let err = BytesError::InvalidData {
        message: "varint overflows u64",
    };
    assert_eq!(err.to_string(), "malformed input: varint overflows u64");
}
