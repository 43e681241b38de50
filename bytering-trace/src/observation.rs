//! Tagged varint observation records.
//!
//! An observation is three varint fields in protobuf wire format:
//!
//! | key    | field       | value           |
//! |--------|-------------|-----------------|
//! | `0x08` | 1 `tag`       | varint `u32`    |
//! | `0x10` | 2 `timestamp` | varint `u64` ns |
//! | `0x18` | 3 `value`     | varint `u64`    |
//!
//! Encoding always emits all three fields in that order.

use bytecast::{BytesError, FromBytes, ToBytes, Varint};

use crate::record::TraceRecord;

/// Key byte for field 1 (`tag`).
pub const TAG_KEY: u8 = 0x08;
/// Key byte for field 2 (`timestamp`).
pub const TIMESTAMP_KEY: u8 = 0x10;
/// Key byte for field 3 (`value`).
pub const VALUE_KEY: u8 = 0x18;

const WIRE_TYPE_MASK: u64 = 0x07;
const WIRE_TYPE_VARINT: u64 = 0;

/// One traced data point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Observation {
    /// Caller-chosen identifier of what was observed.
    pub tag: u32,
    /// Clock reading in nanoseconds.
    pub timestamp: u64,
    /// Observed quantity.
    pub value: u64,
}

impl Observation {
    /// Longest possible encoding: three keys, a 5-byte tag and two 10-byte
    /// varints.
    pub const MAX_ENCODED_LEN: usize = 28;

    /// Create an observation.
    #[must_use]
    pub const fn new(tag: u32, timestamp: u64, value: u64) -> Self {
        Self {
            tag,
            timestamp,
            value,
        }
    }

    /// Exact encoded length of this observation.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        3 + Varint::encoded_len(self.tag as u64)
            + Varint::encoded_len(self.timestamp)
            + Varint::encoded_len(self.value)
    }

    /// Encode into a fixed-size record.
    #[must_use]
    pub fn to_record(&self) -> TraceRecord {
        TraceRecord::new(self)
    }
}

impl ToBytes for Observation {
    const MAX_SIZE: Option<usize> = Some(Self::MAX_ENCODED_LEN);

    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        self.to_record().as_bytes().to_bytes(buf)
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(self.encoded_len())
    }
}

/// Decodes a whole buffer as one observation.
///
/// Fields may appear in any order; a repeated field keeps its last value and
/// a missing one stays 0. Unknown field numbers, non-varint wire types and a
/// tag wider than 32 bits are rejected.
impl FromBytes for Observation {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        if buf.is_empty() {
            return Err(BytesError::UnexpectedEof {
                needed: 1,
                available: 0,
            });
        }

        let mut obs = Self::default();
        let mut reader = bytecast::ByteReader::new(buf);
        while !reader.is_empty() {
            let key = reader.read::<Varint>()?.get();
            if key & WIRE_TYPE_MASK != WIRE_TYPE_VARINT {
                return Err(BytesError::InvalidData {
                    message: "observation field is not a varint",
                });
            }
            let value = reader.read::<Varint>()?.get();
            match key >> 3 {
                1 => {
                    obs.tag = u32::try_from(value).map_err(|_| BytesError::InvalidData {
                        message: "observation tag exceeds u32",
                    })?;
                }
                2 => obs.timestamp = value,
                3 => obs.value = value,
                _ => {
                    return Err(BytesError::InvalidData {
                        message: "unknown observation field",
                    });
                }
            }
        }
        Ok((obs, reader.position()))
    }
}
