//! Unsigned LEB128 variable-length integers.
//!
//! Seven payload bits per byte, least-significant group first, high bit set
//! on every byte except the last. A `u64` takes between 1 and 10 bytes.

use crate::{BytesError, FromBytes, ToBytes};

/// Longest encoding of a `u64`.
pub const MAX_LEN: usize = 10;

/// A `u64` encoded as an unsigned LEB128 varint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Varint(pub u64);

impl Varint {
    /// Number of bytes the encoding of `value` occupies.
    #[inline]
    #[must_use]
    pub const fn encoded_len(value: u64) -> usize {
        let bits = 64 - (value | 1).leading_zeros() as usize;
        bits.div_ceil(7)
    }

    /// Encode into a fixed array, returning it with the number of bytes used.
    ///
    /// ```
    /// use bytecast::Varint;
    ///
    /// let (bytes, len) = Varint(300).to_array();
    /// assert_eq!(&bytes[..len], &[0xAC, 0x02]);
    /// ```
    #[must_use]
    pub const fn to_array(self) -> ([u8; MAX_LEN], usize) {
        let mut out = [0u8; MAX_LEN];
        let mut val = self.0;
        let mut i = 0;
        while val >= 0x80 {
            out[i] = (val & 0x7F) as u8 | 0x80;
            val >>= 7;
            i += 1;
        }
        out[i] = val as u8;
        (out, i + 1)
    }

    /// Unwrap the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Varint {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for Varint {
    #[inline]
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl ToBytes for Varint {
    const MAX_SIZE: Option<usize> = Some(MAX_LEN);

    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        let (bytes, needed) = self.to_array();
        let Some(out) = buf.get_mut(..needed) else {
            return Err(BytesError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        };
        out.copy_from_slice(&bytes[..needed]);
        Ok(needed)
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(Self::encoded_len(self.0))
    }
}

impl FromBytes for Varint {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        let mut value = 0u64;
        for (i, &byte) in buf.iter().take(MAX_LEN).enumerate() {
            let group = u64::from(byte & 0x7F);
            // The tenth byte may only carry the single top bit of a u64.
            if i == MAX_LEN - 1 && group > 1 {
                return Err(BytesError::InvalidData {
                    message: "varint overflows u64",
                });
            }
            value |= group << (7 * i);
            if byte & 0x80 == 0 {
                return Ok((Self(value), i + 1));
            }
        }

        if buf.len() >= MAX_LEN {
            Err(BytesError::InvalidData {
                message: "varint longer than 10 bytes",
            })
        } else {
            Err(BytesError::UnexpectedEof {
                needed: buf.len() + 1,
                available: buf.len(),
            })
        }
    }
}
