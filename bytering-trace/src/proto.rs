//! Fixed-layout diagnostic messages.
//!
//! Each message is one type byte followed by a little-endian body:
//!
//! | type | message       | body                                         |
//! |------|---------------|----------------------------------------------|
//! | 0    | `Protocol`    | `sync`, `version`, `flags`, `crc`: 4 × `u32` |
//! | 1    | `TimeSync`    | `time`: `u64`                                |
//! | 2    | `Observation` | `time`: `u64`, `tag`: `u32`, `value`: `u32`  |

use bytecast::{ByteCursor, BytesError, FromBytes, ToBytes};
use zerocopy::{
    FromBytes as ZcFromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
    byteorder::little_endian::{U32, U64},
};

#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
struct ProtocolBody {
    sync: U32,
    version: U32,
    flags: U32,
    crc: U32,
}

#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
struct TimeSyncBody {
    time: U64,
}

#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
struct ObservationBody {
    time: U64,
    tag: U32,
    value: U32,
}

/// Message type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Link parameters.
    Protocol = 0,
    /// Clock synchronization point.
    TimeSync = 1,
    /// One fixed-width observation.
    Observation = 2,
}

impl MessageType {
    /// Length of the body that follows the type byte.
    #[must_use]
    pub const fn body_len(self) -> usize {
        match self {
            Self::Protocol => size_of::<ProtocolBody>(),
            Self::TimeSync => size_of::<TimeSyncBody>(),
            Self::Observation => size_of::<ObservationBody>(),
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = BytesError;

    fn try_from(byte: u8) -> Result<Self, BytesError> {
        match byte {
            0 => Ok(Self::Protocol),
            1 => Ok(Self::TimeSync),
            2 => Ok(Self::Observation),
            _ => Err(BytesError::InvalidData {
                message: "unknown message type",
            }),
        }
    }
}

/// A diagnostic message.
///
/// ```
/// use bytering_trace::Message;
/// use bytecast::{FromBytes, ToBytes};
///
/// let msg = Message::TimeSync { time: 0x0102 };
/// let mut buf = [0u8; Message::MAX_ENCODED_LEN];
/// let n = msg.to_bytes(&mut buf).unwrap();
/// assert_eq!(&buf[..n], &[1, 0x02, 0x01, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(Message::from_bytes(&buf[..n]).unwrap(), (msg, n));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Link parameters.
    Protocol {
        /// Frame sync word.
        sync: u32,
        /// Protocol version.
        version: u32,
        /// Capability flags.
        flags: u32,
        /// Checksum of the link parameters.
        crc: u32,
    },
    /// Clock synchronization point.
    TimeSync {
        /// Sender's clock in nanoseconds.
        time: u64,
    },
    /// One fixed-width observation.
    Observation {
        /// Sender's clock in nanoseconds.
        time: u64,
        /// What was observed.
        tag: u32,
        /// Observed quantity.
        value: u32,
    },
}

impl Message {
    /// Longest encoding: type byte plus the 16-byte body.
    pub const MAX_ENCODED_LEN: usize = 17;

    /// The type byte this message encodes with.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Protocol { .. } => MessageType::Protocol,
            Self::TimeSync { .. } => MessageType::TimeSync,
            Self::Observation { .. } => MessageType::Observation,
        }
    }

    /// Exact encoded length.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        1 + self.message_type().body_len()
    }
}

impl ToBytes for Message {
    const MAX_SIZE: Option<usize> = Some(Self::MAX_ENCODED_LEN);

    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        let needed = self.encoded_len();
        if buf.len() < needed {
            return Err(BytesError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }

        let mut cursor = ByteCursor::new(buf);
        cursor.write(&(self.message_type() as u8))?;
        match *self {
            Self::Protocol {
                sync,
                version,
                flags,
                crc,
            } => cursor.write(
                ProtocolBody {
                    sync: U32::new(sync),
                    version: U32::new(version),
                    flags: U32::new(flags),
                    crc: U32::new(crc),
                }
                .as_bytes(),
            )?,
            Self::TimeSync { time } => cursor.write(
                TimeSyncBody {
                    time: U64::new(time),
                }
                .as_bytes(),
            )?,
            Self::Observation { time, tag, value } => cursor.write(
                ObservationBody {
                    time: U64::new(time),
                    tag: U32::new(tag),
                    value: U32::new(value),
                }
                .as_bytes(),
            )?,
        };
        Ok(cursor.position())
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(self.encoded_len())
    }
}

impl FromBytes for Message {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        let Some((&ty, body)) = buf.split_first() else {
            return Err(BytesError::UnexpectedEof {
                needed: 1,
                available: 0,
            });
        };
        let ty = MessageType::try_from(ty)?;
        let needed = 1 + ty.body_len();
        let eof = || BytesError::UnexpectedEof {
            needed,
            available: buf.len(),
        };

        let msg = match ty {
            MessageType::Protocol => {
                let (b, _) = ProtocolBody::read_from_prefix(body).map_err(|_| eof())?;
                Self::Protocol {
                    sync: b.sync.get(),
                    version: b.version.get(),
                    flags: b.flags.get(),
                    crc: b.crc.get(),
                }
            }
            MessageType::TimeSync => {
                let (b, _) = TimeSyncBody::read_from_prefix(body).map_err(|_| eof())?;
                Self::TimeSync { time: b.time.get() }
            }
            MessageType::Observation => {
                let (b, _) = ObservationBody::read_from_prefix(body).map_err(|_| eof())?;
                Self::Observation {
                    time: b.time.get(),
                    tag: b.tag.get(),
                    value: b.value.get(),
                }
            }
        };
        Ok((msg, needed))
    }
}
