//! Ring observer that emits trace records.

use bytering_core::{Observer, RingInfo, RingState};
use spout::Spout;

use crate::{clock::Clock, record::TraceRecord, tracer::Tracer};

/// Observation tags used for each ring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTags {
    /// Tag for `init`; the value is the ring capacity.
    pub init: u32,
    /// Tag for `clear`; the value is always 0.
    pub clear: u32,
    /// Tag for `write`; the value is the byte count.
    pub write: u32,
    /// Tag for `read`; the value is the byte count.
    pub read: u32,
}

impl Default for EventTags {
    fn default() -> Self {
        Self {
            init: 1,
            clear: 2,
            write: 3,
            read: 4,
        }
    }
}

/// Traces every ring event through a [`Tracer`].
///
/// Records the spout refuses are counted in [`dropped`](Self::dropped) and
/// otherwise ignored; the ring never sees them.
///
/// # Example
///
/// ```
/// use bytering_core::ByteRing;
/// use bytering_trace::{TraceObserver, Tracer, ZeroClock};
/// use spout::CollectSpout;
///
/// let mut storage = [0u8; 8];
/// let mut ring = ByteRing::builder()
///     .observer(TraceObserver::new(Tracer::new(ZeroClock, CollectSpout::new())))
///     .build(&mut storage)
///     .unwrap();
/// ring.write(b"abc");
///
/// let records = ring.observer().unwrap().tracer().spout().items();
/// let write = records[1].decode().unwrap();
/// assert_eq!((write.tag, write.value), (3, 3));
/// ```
#[derive(Debug, Clone)]
pub struct TraceObserver<C, S> {
    tracer: Tracer<C, S>,
    tags: EventTags,
    dropped: usize,
}

impl<C: Clock, S: Spout<TraceRecord>> TraceObserver<C, S> {
    /// Trace with the default [`EventTags`].
    pub fn new(tracer: Tracer<C, S>) -> Self {
        Self::with_tags(tracer, EventTags::default())
    }

    /// Trace with custom tags.
    pub fn with_tags(tracer: Tracer<C, S>, tags: EventTags) -> Self {
        Self {
            tracer,
            tags,
            dropped: 0,
        }
    }

    /// The tags in use.
    pub fn tags(&self) -> EventTags {
        self.tags
    }

    /// Records the spout refused so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Reference to the tracer.
    pub fn tracer(&self) -> &Tracer<C, S> {
        &self.tracer
    }

    /// Mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer<C, S> {
        &mut self.tracer
    }

    /// Consume the observer and return the tracer.
    pub fn into_tracer(self) -> Tracer<C, S> {
        self.tracer
    }

    fn record(&mut self, tag: u32, value: usize) {
        if self.tracer.observe(tag, value as u64).is_err() {
            self.dropped += 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(tag, value, dropped = self.dropped, "trace record dropped");
        }
    }
}

impl<C: Clock, S: Spout<TraceRecord>> Observer for TraceObserver<C, S> {
    fn on_init(&mut self, ring: &RingState) {
        self.record(self.tags.init, ring.capacity());
    }

    fn on_clear(&mut self, _ring: &RingState) {
        self.record(self.tags.clear, 0);
    }

    fn on_write(&mut self, _ring: &RingState, bytes: usize) {
        self.record(self.tags.write, bytes);
    }

    fn on_read(&mut self, _ring: &RingState, bytes: usize) {
        self.record(self.tags.read, bytes);
    }
}
