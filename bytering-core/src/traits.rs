/// Size and occupancy queries shared by the ring, its split halves and the
/// snapshot handed to observers.
pub trait RingInfo {
    /// Returns the number of pending (written, unread) bytes.
    fn count(&self) -> usize;

    /// Returns the storage length in bytes. Zero for an invalid ring.
    fn capacity(&self) -> usize;

    /// Returns `true` if no bytes are pending.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if no more bytes can be written.
    ///
    /// An invalid ring (capacity 0) is never full.
    fn is_full(&self) -> bool {
        self.capacity() > 0 && self.count() >= self.capacity()
    }

    /// Returns the number of bytes that can be written right now.
    fn free(&self) -> usize {
        self.capacity().saturating_sub(self.count())
    }
}

/// Producer side of a byte ring.
///
/// See [`ByteRing`](crate::ByteRing) and [`Producer`](crate::Producer).
pub trait ByteProducer: RingInfo {
    /// Copies as much of `src` as fits and returns the number of bytes taken.
    ///
    /// Never blocks. A full ring or an empty `src` yields 0.
    fn write(&mut self, src: &[u8]) -> usize;
}

/// Consumer side of a byte ring.
///
/// See [`ByteRing`](crate::ByteRing) and [`Consumer`](crate::Consumer).
pub trait ByteConsumer: RingInfo {
    /// Moves up to `dst.len()` of the oldest pending bytes into `dst` and
    /// returns how many were moved.
    fn read(&mut self, dst: &mut [u8]) -> usize;

    /// Copies up to `dst.len()` of the oldest pending bytes into `dst`
    /// without consuming them.
    #[must_use]
    fn peek(&self, dst: &mut [u8]) -> usize;
}
