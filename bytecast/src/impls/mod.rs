//! Little-endian implementations for primitive types and byte arrays.
//!
//! All multi-byte primitives serialize as **little-endian** regardless of
//! platform, matching the wire layout of the message records.

use crate::{BytesError, FromBytes, ToBytes};

macro_rules! impl_le_primitive {
    ($($ty:ty),+) => { $(
        impl ToBytes for $ty {
            const MAX_SIZE: Option<usize> = Some(core::mem::size_of::<$ty>());

            #[inline]
            fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
                const N: usize = core::mem::size_of::<$ty>();
                let Some(dst) = buf.get_mut(..N) else {
                    return Err(BytesError::BufferTooSmall { needed: N, available: buf.len() });
                };
                dst.copy_from_slice(&self.to_le_bytes());
                Ok(N)
            }
        }

        impl FromBytes for $ty {
            #[inline]
            fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
                const N: usize = core::mem::size_of::<$ty>();
                let mut arr = [0u8; N];
                let Some(src) = buf.get(..N) else {
                    return Err(BytesError::UnexpectedEof { needed: N, available: buf.len() });
                };
                arr.copy_from_slice(src);
                Ok((<$ty>::from_le_bytes(arr), N))
            }
        }
    )+ };
}

impl_le_primitive!(u8, u16, u32, u64, i8, i16, i32, i64);

// bool - only 0 or 1 are valid on the way back in
impl ToBytes for bool {
    const MAX_SIZE: Option<usize> = Some(1);

    #[inline]
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        u8::from(*self).to_bytes(buf)
    }
}

impl FromBytes for bool {
    #[inline]
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        match u8::from_bytes(buf)? {
            (0, n) => Ok((false, n)),
            (1, n) => Ok((true, n)),
            _ => Err(BytesError::InvalidData {
                message: "bool must be 0 or 1",
            }),
        }
    }
}

// Fixed byte arrays are copied verbatim.
impl<const N: usize> ToBytes for [u8; N] {
    const MAX_SIZE: Option<usize> = Some(N);

    #[inline]
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        self.as_slice().to_bytes(buf)
    }
}

impl<const N: usize> FromBytes for [u8; N] {
    #[inline]
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        let mut arr = [0u8; N];
        let Some(src) = buf.get(..N) else {
            return Err(BytesError::UnexpectedEof {
                needed: N,
                available: buf.len(),
            });
        };
        arr.copy_from_slice(src);
        Ok((arr, N))
    }
}

impl ToBytes for [u8] {
    #[inline]
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        let Some(dst) = buf.get_mut(..self.len()) else {
            return Err(BytesError::BufferTooSmall {
                needed: self.len(),
                available: buf.len(),
            });
        };
        dst.copy_from_slice(self);
        Ok(self.len())
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }
}
