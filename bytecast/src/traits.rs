//! Byte serialization traits.

use crate::BytesError;

/// Serialize a value to a caller-provided buffer.
pub trait ToBytes {
    /// Maximum serialized size, if known at compile time.
    const MAX_SIZE: Option<usize> = None;

    /// Serialize into the buffer. Returns bytes written.
    ///
    /// # Errors
    /// Returns [`BytesError::BufferTooSmall`] if `buf` cannot hold the value.
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError>;

    /// Exact serialized size of this value, if cheap to compute.
    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Self::MAX_SIZE
    }
}

/// Deserialize from bytes to an owned value.
pub trait FromBytes: Sized {
    /// Deserialize from bytes. Returns value and bytes consumed.
    ///
    /// # Errors
    /// Returns [`BytesError::UnexpectedEof`] on short input or
    /// [`BytesError::InvalidData`] on malformed input.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError>;
}

impl<T: ToBytes + ?Sized> ToBytes for &T {
    const MAX_SIZE: Option<usize> = T::MAX_SIZE;

    #[inline]
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        (**self).to_bytes(buf)
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        (**self).byte_len()
    }
}
