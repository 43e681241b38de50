//! Byte ring over caller-owned storage.

use core::{fmt, ops::Range};

use spout::Spout;

use crate::{
    builder::RingBuilder,
    error::{InitError, WriteError},
    index::AtomicIndex,
    observer::{NoObserver, Observer, RingEvent, RingState},
    traits::{ByteConsumer, ByteProducer, RingInfo},
};

/// Largest accepted storage length in bytes.
///
/// The ring targets embedded-scale queues; 16-bit lengths keep cursor
/// arithmetic well clear of overflow on every target.
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Fixed-capacity FIFO of bytes over a borrowed `&mut [u8]`.
///
/// State is a write cursor plus a pending-byte count. The read position is
/// derived as `(write_cursor - count) mod capacity`, so the ring is empty
/// when `count == 0`, full when `count == capacity`, and the full storage
/// length is usable.
///
/// # Invalid rings
///
/// A ring built with [`uninit`](Self::uninit) or whose last
/// [`init`](Self::init) failed has capacity 0. Every operation on it is a
/// no-op with a safe result: `is_empty()` is `true`, `is_full()` is `false`,
/// `count()` is 0, and writes and reads move 0 bytes.
///
/// # Single producer, single consumer
///
/// The ring does no locking. Callers that touch one ring from two contexts
/// must make sure exactly one of them writes and exactly one reads, and must
/// hand the ring over through [`split`](Self::split) (or their own critical
/// section) rather than sharing `&mut` access.
///
/// # Observers
///
/// `O` receives [`Observer`] hooks after each successful `init` and after
/// every `clear`, `write` and `read` call. The default [`NoObserver`] makes
/// notification an `Option::None` check.
pub struct ByteRing<'a, O: Observer = NoObserver> {
    storage: &'a mut [u8],
    write: usize,
    count: AtomicIndex,
    observer: Option<O>,
}

impl<'a> ByteRing<'a, NoObserver> {
    /// Create a builder for configuring a [`ByteRing`].
    ///
    /// # Example
    ///
    /// ```
    /// use bytering_core::{ByteRing, CountingObserver};
    ///
    /// let mut storage = [0u8; 32];
    /// let ring = ByteRing::builder()
    ///     .observer(CountingObserver::new())
    ///     .build(&mut storage)
    ///     .unwrap();
    /// assert_eq!(ring.observer().unwrap().inits, 1);
    /// ```
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    /// Create a ring over `storage`. Capacity is `storage.len()`.
    ///
    /// # Errors
    /// Returns [`InitError`] if `storage` is empty or longer than
    /// [`MAX_CAPACITY`].
    pub fn new(storage: &'a mut [u8]) -> Result<Self, InitError> {
        let mut ring = Self::uninit();
        ring.init(storage)?;
        Ok(ring)
    }

    /// Create an invalid ring with no storage. Call [`init`](Self::init)
    /// before use.
    #[must_use]
    pub fn uninit() -> Self {
        Self::detached(None)
    }
}

impl<'a, O: Observer> ByteRing<'a, O> {
    /// Create an invalid ring that already has `observer` attached.
    ///
    /// The observer's `on_init` fires once [`init`](Self::init) succeeds.
    #[must_use]
    pub fn observed(observer: O) -> Self {
        Self::detached(Some(observer))
    }

    pub(crate) fn detached(observer: Option<O>) -> Self {
        Self {
            storage: <&mut [u8]>::default(),
            write: 0,
            count: AtomicIndex::new(0),
            observer,
        }
    }

    /// (Re)initialize the ring over `storage`, discarding any pending bytes.
    ///
    /// On success the ring is empty with capacity `storage.len()` and the
    /// observer's `on_init` fires. On failure the ring becomes invalid and no
    /// hook fires. The attached observer is kept either way.
    ///
    /// # Errors
    /// Returns [`InitError::ZeroCapacity`] for empty storage and
    /// [`InitError::CapacityTooLarge`] above [`MAX_CAPACITY`].
    pub fn init(&mut self, storage: &'a mut [u8]) -> Result<(), InitError> {
        self.write = 0;
        self.count.store_mut(0);

        let capacity = storage.len();
        let checked = if capacity == 0 {
            Err(InitError::ZeroCapacity)
        } else if capacity > MAX_CAPACITY {
            Err(InitError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            })
        } else {
            Ok(())
        };

        if let Err(err) = checked {
            self.storage = <&mut [u8]>::default();
            #[cfg(feature = "tracing")]
            tracing::warn!(capacity, error = %err, "byte ring init rejected storage");
            return Err(err);
        }

        self.storage = storage;
        #[cfg(feature = "tracing")]
        tracing::debug!(capacity, "byte ring initialized");
        self.notify(RingEvent::Init);
        Ok(())
    }

    /// Discard all pending bytes. Storage contents are left as they are.
    ///
    /// Fires `on_clear`.
    pub fn clear(&mut self) {
        self.write = 0;
        self.count.store_mut(0);
        self.notify(RingEvent::Clear);
    }

    /// Copy as much of `src` as fits and return the number of bytes taken.
    ///
    /// Bytes land in at most two runs: from the write cursor to the end of
    /// storage, then from offset 0. Never blocks and never fails; a full
    /// ring, an invalid ring or an empty `src` yields 0.
    ///
    /// Fires `on_write` with the returned count, including 0.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let n = self.push_bytes(src);
        #[cfg(feature = "tracing")]
        if n < src.len() {
            tracing::trace!(requested = src.len(), written = n, "byte ring write truncated");
        }
        self.notify(RingEvent::Write(n));
        n
    }

    /// Move up to `dst.len()` of the oldest pending bytes into `dst` and
    /// return how many were moved.
    ///
    /// Bytes past the returned count in `dst` are left untouched.
    ///
    /// Fires `on_read` with the returned count, including 0.
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        let n = self.copy_out(dst);
        self.consume(n);
        self.notify(RingEvent::Read(n));
        n
    }

    /// Discard up to `n` of the oldest pending bytes and return how many
    /// were discarded.
    ///
    /// Fires `on_read` like a read of the same length.
    pub fn skip(&mut self, n: usize) -> usize {
        let n = n.min(self.count.load_mut());
        self.consume(n);
        self.notify(RingEvent::Read(n));
        n
    }

    /// Write from the ring's own storage.
    ///
    /// Copies the bytes at physical offsets `src` into free space exactly as
    /// [`write`](Self::write) would copy a separate slice. Source and
    /// destination may overlap; the result is the same as if the source had
    /// been copied out first. A range outside the storage moves 0 bytes.
    ///
    /// Cost is O(bytes moved), except when the move wraps and each of its
    /// two runs overwrites the other's source. That case rotates through the
    /// whole storage in place and costs O(capacity).
    ///
    /// Fires `on_write`.
    pub fn write_within(&mut self, src: Range<usize>) -> usize {
        let n = self.push_within(src);
        self.notify(RingEvent::Write(n));
        n
    }

    /// Read into the ring's own storage.
    ///
    /// Moves up to `len` of the oldest pending bytes to physical offsets
    /// starting at `dst`, with the same overlap handling as
    /// [`write_within`](Self::write_within), including its O(capacity)
    /// worst case. A destination that would run past the end of storage
    /// moves 0 bytes.
    ///
    /// Fires `on_read`.
    pub fn read_within(&mut self, dst: usize, len: usize) -> usize {
        let n = self.pop_within(dst, len);
        self.notify(RingEvent::Read(n));
        n
    }

    /// Number of pending bytes.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load()
    }

    /// Storage length in bytes. Zero for an invalid ring.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes that can be written before the ring is full.
    #[inline]
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity() - self.count()
    }

    /// True if no bytes are pending (always true for an invalid ring).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True if a write would move 0 bytes (never true for an invalid ring).
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        let capacity = self.capacity();
        capacity > 0 && self.count() == capacity
    }

    /// True once `init` has succeeded over non-empty storage.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.storage.is_empty()
    }

    /// Physical offset the next write lands on.
    #[inline]
    #[must_use]
    pub fn write_cursor(&self) -> usize {
        self.write
    }

    /// Physical offset of the oldest pending byte.
    #[inline]
    #[must_use]
    pub fn read_cursor(&self) -> usize {
        read_cursor(self.write, self.count(), self.capacity())
    }

    /// Snapshot of the current state, as observers see it.
    #[inline]
    #[must_use]
    pub fn state(&self) -> RingState {
        RingState {
            capacity: self.capacity(),
            count: self.count(),
            write_cursor: self.write,
        }
    }

    /// Attach `observer`, returning the one it replaces.
    pub fn attach_observer(&mut self, observer: O) -> Option<O> {
        self.observer.replace(observer)
    }

    /// Detach and return the current observer.
    pub fn detach_observer(&mut self) -> Option<O> {
        self.observer.take()
    }

    /// Reference to the attached observer.
    #[inline]
    #[must_use]
    pub fn observer(&self) -> Option<&O> {
        self.observer.as_ref()
    }

    /// Mutable reference to the attached observer.
    #[inline]
    pub fn observer_mut(&mut self) -> Option<&mut O> {
        self.observer.as_mut()
    }

    // ── internals ────────────────────────────────────────────────────

    #[inline]
    fn notify(&mut self, event: RingEvent) {
        if self.observer.is_none() {
            return;
        }
        let state = self.state();
        if let Some(observer) = self.observer.as_mut() {
            event.dispatch(observer, &state);
        }
    }

    fn push_bytes(&mut self, src: &[u8]) -> usize {
        let capacity = self.storage.len();
        let count = self.count.load_mut();
        let n = src.len().min(capacity - count);
        if n == 0 {
            return 0;
        }

        let start = self.write;
        let first = n.min(capacity - start);
        self.storage[start..start + first].copy_from_slice(&src[..first]);
        self.storage[..n - first].copy_from_slice(&src[first..n]);

        self.write = advance(start, n, capacity);
        self.count.store_mut(count + n);
        n
    }

    /// Copy pending bytes out without consuming them.
    pub(crate) fn copy_out(&self, dst: &mut [u8]) -> usize {
        let capacity = self.capacity();
        let n = dst.len().min(self.count());
        if n == 0 {
            return 0;
        }

        let start = self.read_cursor();
        let first = n.min(capacity - start);
        dst[..first].copy_from_slice(&self.storage[start..start + first]);
        dst[first..n].copy_from_slice(&self.storage[..n - first]);
        n
    }

    #[inline]
    fn consume(&mut self, n: usize) {
        let count = self.count.load_mut();
        self.count.store_mut(count - n);
    }

    fn push_within(&mut self, src: Range<usize>) -> usize {
        let capacity = self.storage.len();
        if src.start > src.end || src.end > capacity {
            return 0;
        }
        let count = self.count.load_mut();
        let n = src.len().min(capacity - count);
        if n == 0 {
            return 0;
        }

        let start = self.write;
        let first = n.min(capacity - start);
        move_runs(
            self.storage,
            Run::new(src.start, start, first),
            Run::new(src.start + first, 0, n - first),
        );

        self.write = advance(start, n, capacity);
        self.count.store_mut(count + n);
        n
    }

    fn pop_within(&mut self, dst: usize, len: usize) -> usize {
        let capacity = self.storage.len();
        let n = len.min(self.count.load_mut());
        if n == 0 || dst > capacity || n > capacity - dst {
            return 0;
        }

        let start = self.read_cursor();
        let first = n.min(capacity - start);
        move_runs(
            self.storage,
            Run::new(start, dst, first),
            Run::new(0, dst + first, n - first),
        );

        self.consume(n);
        n
    }

    pub(crate) fn storage_ref(&self) -> &[u8] {
        self.storage
    }

    #[cfg(target_has_atomic = "ptr")]
    pub(crate) fn parts_mut(&mut self) -> (&mut [u8], &mut usize, &AtomicIndex) {
        (&mut *self.storage, &mut self.write, &self.count)
    }
}

/// Derived read position: `(write - count) mod capacity`.
#[inline]
pub(crate) const fn read_cursor(write: usize, count: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    // write < capacity and count <= capacity, so this stays in [0, 2 * capacity).
    let pos = write + capacity - count;
    if pos >= capacity { pos - capacity } else { pos }
}

/// Advance a cursor by `n <= capacity` bytes, wrapping once at most.
#[inline]
pub(crate) const fn advance(idx: usize, n: usize, capacity: usize) -> usize {
    let next = idx + n;
    if next >= capacity { next - capacity } else { next }
}

/// One contiguous in-storage move.
#[derive(Clone, Copy)]
struct Run {
    src: usize,
    dst: usize,
    len: usize,
}

impl Run {
    const fn new(src: usize, dst: usize, len: usize) -> Self {
        Self { src, dst, len }
    }

    /// True if writing this run destroys bytes `later` still has to read.
    fn clobbers(&self, later: &Run) -> bool {
        self.len > 0
            && later.len > 0
            && self.dst < later.src + later.len
            && later.src < self.dst + self.len
    }

    fn apply(&self, buf: &mut [u8]) {
        if self.len > 0 {
            buf.copy_within(self.src..self.src + self.len, self.dst);
        }
    }
}

/// Move two runs within `buf` as if both sources were read before either
/// destination is written.
///
/// `first` and `second` are consecutive pieces of one circular move: the
/// second run's source and destination continue where the first run's end.
fn move_runs(buf: &mut [u8], first: Run, second: Run) {
    match (first.clobbers(&second), second.clobbers(&first)) {
        (false, _) => {
            first.apply(buf);
            second.apply(buf);
        }
        (true, false) => {
            second.apply(buf);
            first.apply(buf);
        }
        (true, true) => shift_cycles(buf, first.src, first.dst, first.len + second.len),
    }
}

/// Circular move of `len` bytes from offset `src` to offset `dst`.
///
/// Walks each cycle of the shift `dst - src (mod capacity)` carrying one byte,
/// so any overlap is handled without scratch space. Only positions in the
/// destination arc are written.
fn shift_cycles(buf: &mut [u8], src: usize, dst: usize, len: usize) {
    let capacity = buf.len();
    if capacity == 0 || len == 0 {
        return;
    }
    let shift = (dst + capacity - src) % capacity;
    let cycles = gcd(capacity, shift);
    let cycle_len = capacity / cycles;

    for start in 0..cycles {
        let mut carried = buf[(start + capacity - shift) % capacity];
        let mut pos = start;
        for _ in 0..cycle_len {
            if (pos + capacity - dst) % capacity < len {
                core::mem::swap(&mut buf[pos], &mut carried);
            } else {
                carried = buf[pos];
            }
            pos = (pos + shift) % capacity;
        }
    }
}

const fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl<O: Observer> Default for ByteRing<'_, O> {
    fn default() -> Self {
        Self::detached(None)
    }
}

impl<O: Observer> fmt::Debug for ByteRing<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteRing")
            .field("capacity", &self.capacity())
            .field("count", &self.count())
            .field("write_cursor", &self.write)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl<O: Observer> RingInfo for ByteRing<'_, O> {
    #[inline]
    fn count(&self) -> usize {
        ByteRing::count(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        ByteRing::capacity(self)
    }
}

impl<O: Observer> ByteProducer for ByteRing<'_, O> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> usize {
        ByteRing::write(self, src)
    }
}

impl<O: Observer> ByteConsumer for ByteRing<'_, O> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> usize {
        ByteRing::read(self, dst)
    }

    #[inline]
    fn peek(&self, dst: &mut [u8]) -> usize {
        ByteRing::peek(self, dst)
    }
}

/// A ring can sit at the end of a pipeline as a byte sink.
///
/// Each item is written whole or reported as [`WriteError::Truncated`];
/// the accepted prefix stays in the ring.
impl<O: Observer> Spout<&[u8]> for ByteRing<'_, O> {
    type Error = WriteError;

    #[inline]
    fn send(&mut self, item: &[u8]) -> Result<(), WriteError> {
        let written = self.write(item);
        if written < item.len() {
            return Err(WriteError::Truncated {
                written,
                requested: item.len(),
            });
        }
        Ok(())
    }
}
