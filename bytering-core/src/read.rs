//! Non-consuming access to pending bytes.

use crate::{observer::Observer, ring::ByteRing};

impl<O: Observer> ByteRing<'_, O> {
    /// Copy up to `dst.len()` of the oldest pending bytes into `dst` without
    /// consuming them. No observer hook fires.
    #[inline]
    #[must_use]
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        self.copy_out(dst)
    }

    /// Pending bytes as two slices in FIFO order.
    ///
    /// The second slice is non-empty only when the pending bytes wrap past the
    /// end of storage.
    ///
    /// ```
    /// use bytering_core::ByteRing;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut ring = ByteRing::new(&mut storage).unwrap();
    /// ring.write(b"abc");
    /// ring.read(&mut [0u8; 2]);
    /// ring.write(b"de");
    ///
    /// let (head, tail) = ring.as_slices();
    /// assert_eq!(head, b"cd");
    /// assert_eq!(tail, b"e");
    /// ```
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let storage = self.storage_ref();
        let count = self.count();
        if count == 0 {
            return (&[], &[]);
        }
        let start = self.read_cursor();
        let first = count.min(storage.len() - start);
        (&storage[start..start + first], &storage[..count - first])
    }

    /// The whole backing storage, pending or not.
    ///
    /// Physical offsets here are the ones [`write_within`](Self::write_within)
    /// and [`read_within`](Self::read_within) take.
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &[u8] {
        self.storage_ref()
    }
}
