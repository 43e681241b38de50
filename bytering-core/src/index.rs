//! Occupancy counter shared between the ring and its split halves.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Byte count using Acquire/Release ordering.
///
/// The owning [`ByteRing`](crate::ByteRing) goes through `load_mut` /
/// `store_mut` when it has exclusive access. Split halves share it by
/// reference and adjust it with `add` / `sub`.
#[repr(transparent)]
pub(crate) struct AtomicIndex(AtomicUsize);

impl AtomicIndex {
    #[inline]
    pub(crate) const fn new(val: usize) -> Self {
        Self(AtomicUsize::new(val))
    }

    /// Load with Acquire ordering.
    #[inline]
    pub(crate) fn load(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    /// Load without atomics (exclusive access).
    #[inline]
    pub(crate) fn load_mut(&mut self) -> usize {
        *self.0.get_mut()
    }

    /// Store without atomics (exclusive access).
    #[inline]
    pub(crate) fn store_mut(&mut self, val: usize) {
        *self.0.get_mut() = val;
    }

    /// Publish `n` newly written bytes (Release).
    #[cfg(target_has_atomic = "ptr")]
    #[inline]
    pub(crate) fn add(&self, n: usize) {
        self.0.fetch_add(n, Ordering::Release);
    }

    /// Release `n` consumed bytes back to the producer (Release).
    #[cfg(target_has_atomic = "ptr")]
    #[inline]
    pub(crate) fn sub(&self, n: usize) {
        self.0.fetch_sub(n, Ordering::Release);
    }
}
