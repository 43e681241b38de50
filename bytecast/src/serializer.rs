use crate::{BytesError, FromBytes, ToBytes};

/// Write cursor for sequential serialization into a borrowed buffer.
pub struct ByteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Start writing at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Serialize `value` at the current position and advance past it.
    ///
    /// # Errors
    /// Propagates the value's [`BytesError`]; the cursor does not move.
    pub fn write<T: ToBytes + ?Sized>(&mut self, value: &T) -> Result<usize, BytesError> {
        let n = value.to_bytes(&mut self.buf[self.pos..])?;
        self.pos += n;
        Ok(n)
    }

    /// Bytes written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Room left after the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// The bytes written so far.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

/// Read cursor for sequential deserialization.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Start reading at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Deserialize the next value and advance past it.
    ///
    /// # Errors
    /// Propagates the value's [`BytesError`]; the reader does not move.
    pub fn read<T: FromBytes>(&mut self) -> Result<T, BytesError> {
        let (v, n) = T::from_bytes(&self.buf[self.pos..])?;
        self.pos += n;
        Ok(v)
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }
}
