//! Lifecycle observers.
//!
//! An [`Observer`] is told about every successful `init`, every `clear`,
//! and every `write` / `read` call on a [`ByteRing`](crate::ByteRing), after
//! the ring has committed the change. Hooks receive a [`RingState`]
//! snapshot, so an observer that asks for `count()` sees the post-call
//! value. Hooks return nothing and cannot change what the call did.

use spout::Spout;

use crate::traits::RingInfo;

/// Post-mutation snapshot of a ring, passed to every observer hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingState {
    pub(crate) capacity: usize,
    pub(crate) count: usize,
    pub(crate) write_cursor: usize,
}

impl RingState {
    /// Physical offset the next write lands on.
    #[inline]
    #[must_use]
    pub const fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Physical offset of the oldest pending byte.
    #[inline]
    #[must_use]
    pub const fn read_cursor(&self) -> usize {
        crate::ring::read_cursor(self.write_cursor, self.count, self.capacity)
    }
}

impl RingInfo for RingState {
    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Receives ring lifecycle notifications.
///
/// Every hook has an empty default, so implement only what you need.
///
/// # Example
///
/// ```
/// use bytering_core::{ByteRing, Observer, RingInfo, RingState};
///
/// #[derive(Default)]
/// struct HighWater(usize);
///
/// impl Observer for HighWater {
///     fn on_write(&mut self, ring: &RingState, _bytes: usize) {
///         self.0 = self.0.max(ring.count());
///     }
/// }
///
/// let mut storage = [0u8; 16];
/// let mut ring = ByteRing::builder()
///     .observer(HighWater::default())
///     .build(&mut storage)
///     .unwrap();
///
/// ring.write(b"abcdef");
/// ring.read(&mut [0u8; 4]);
/// ring.write(b"gh");
/// assert_eq!(ring.observer().unwrap().0, 6);
/// ```
pub trait Observer {
    /// The ring was (re)initialized over valid storage.
    fn on_init(&mut self, _ring: &RingState) {}

    /// The ring was cleared.
    fn on_clear(&mut self, _ring: &RingState) {}

    /// A write call finished, moving `bytes` bytes in (possibly 0).
    fn on_write(&mut self, _ring: &RingState, _bytes: usize) {}

    /// A read call finished, moving `bytes` bytes out (possibly 0).
    fn on_read(&mut self, _ring: &RingState, _bytes: usize) {}
}

/// The absent observer. Every hook is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoObserver;

impl Observer for NoObserver {}

/// Borrowed observers: attach `&mut obs` to keep ownership with the caller.
impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn on_init(&mut self, ring: &RingState) {
        (**self).on_init(ring);
    }

    #[inline]
    fn on_clear(&mut self, ring: &RingState) {
        (**self).on_clear(ring);
    }

    #[inline]
    fn on_write(&mut self, ring: &RingState, bytes: usize) {
        (**self).on_write(ring, bytes);
    }

    #[inline]
    fn on_read(&mut self, ring: &RingState, bytes: usize) {
        (**self).on_read(ring, bytes);
    }
}

/// One ring lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingEvent {
    /// Successful (re)initialization.
    Init,
    /// The ring was cleared.
    Clear,
    /// Bytes moved in by a write call.
    Write(usize),
    /// Bytes moved out by a read call.
    Read(usize),
}

impl RingEvent {
    /// Invoke the matching hook on `observer`.
    #[inline]
    pub fn dispatch<O: Observer + ?Sized>(self, observer: &mut O, ring: &RingState) {
        match self {
            Self::Init => observer.on_init(ring),
            Self::Clear => observer.on_clear(ring),
            Self::Write(n) => observer.on_write(ring, n),
            Self::Read(n) => observer.on_read(ring, n),
        }
    }
}

/// Tallies hook invocations and transferred bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingObserver {
    /// `on_init` calls.
    pub inits: usize,
    /// `on_clear` calls.
    pub clears: usize,
    /// `on_write` calls, including zero-byte ones.
    pub writes: usize,
    /// `on_read` calls, including zero-byte ones.
    pub reads: usize,
    /// Sum of bytes reported by `on_write`.
    pub bytes_written: usize,
    /// Sum of bytes reported by `on_read`.
    pub bytes_read: usize,
    /// Byte count of the most recent write notification.
    pub last_write: Option<usize>,
    /// Byte count of the most recent read notification.
    pub last_read: Option<usize>,
    /// Snapshot passed to the most recent hook.
    pub last_state: Option<RingState>,
}

impl CountingObserver {
    /// Create an observer with all tallies at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total hook invocations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.inits + self.clears + self.writes + self.reads
    }
}

impl Observer for CountingObserver {
    fn on_init(&mut self, ring: &RingState) {
        self.inits += 1;
        self.last_state = Some(*ring);
    }

    fn on_clear(&mut self, ring: &RingState) {
        self.clears += 1;
        self.last_state = Some(*ring);
    }

    fn on_write(&mut self, ring: &RingState, bytes: usize) {
        self.writes += 1;
        self.bytes_written += bytes;
        self.last_write = Some(bytes);
        self.last_state = Some(*ring);
    }

    fn on_read(&mut self, ring: &RingState, bytes: usize) {
        self.reads += 1;
        self.bytes_read += bytes;
        self.last_read = Some(bytes);
        self.last_state = Some(*ring);
    }
}

/// Forwards every event to a [`Spout`].
///
/// Send failures are dropped: an observer has no way to report them and must
/// not affect the ring.
#[derive(Debug, Clone, Default)]
pub struct SpoutObserver<S> {
    spout: S,
}

impl<S: Spout<RingEvent>> SpoutObserver<S> {
    /// Forward events to `spout`.
    pub fn new(spout: S) -> Self {
        Self { spout }
    }

    /// Reference to the spout.
    pub fn spout(&self) -> &S {
        &self.spout
    }

    /// Mutable reference to the spout.
    pub fn spout_mut(&mut self) -> &mut S {
        &mut self.spout
    }

    /// Consume the observer and return the spout.
    pub fn into_inner(self) -> S {
        self.spout
    }

    #[inline]
    fn forward(&mut self, event: RingEvent) {
        let _ = self.spout.send(event);
    }
}

impl<S: Spout<RingEvent>> Observer for SpoutObserver<S> {
    fn on_init(&mut self, _ring: &RingState) {
        self.forward(RingEvent::Init);
    }

    fn on_clear(&mut self, _ring: &RingState) {
        self.forward(RingEvent::Clear);
    }

    fn on_write(&mut self, _ring: &RingState, bytes: usize) {
        self.forward(RingEvent::Write(bytes));
    }

    fn on_read(&mut self, _ring: &RingState, bytes: usize) {
        self.forward(RingEvent::Read(bytes));
    }
}
