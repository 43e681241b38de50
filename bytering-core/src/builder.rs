//! Builder for constructing byte rings.

use crate::{
    error::InitError,
    observer::{NoObserver, Observer},
    ring::ByteRing,
};

/// Builder for constructing a [`ByteRing`].
///
/// Created via [`ByteRing::builder()`]. Attach an observer with
/// [`.observer()`](Self::observer), then call [`.build()`](Self::build) with
/// the backing storage. The observer is attached before initialization, so
/// it sees the first `on_init`.
///
/// # Example
///
/// ```
/// use bytering_core::{ByteRing, RingEvent, SpoutObserver};
/// use spout::CollectSpout;
///
/// let mut storage = [0u8; 8];
/// let mut ring = ByteRing::builder()
///     .observer(SpoutObserver::new(CollectSpout::new()))
///     .build(&mut storage)
///     .unwrap();
///
/// ring.write(b"abc");
/// let events = ring.observer().unwrap().spout().items();
/// assert_eq!(events, &[RingEvent::Init, RingEvent::Write(3)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RingBuilder<O: Observer = NoObserver> {
    observer: Option<O>,
}

impl RingBuilder<NoObserver> {
    pub(crate) fn new() -> Self {
        Self { observer: None }
    }
}

impl<O: Observer> RingBuilder<O> {
    /// Attach `observer` to the ring being built.
    pub fn observer<O2: Observer>(self, observer: O2) -> RingBuilder<O2> {
        RingBuilder {
            observer: Some(observer),
        }
    }

    /// Build the ring over `storage`.
    ///
    /// # Errors
    /// Returns [`InitError`] if `storage` is empty or longer than
    /// [`MAX_CAPACITY`](crate::MAX_CAPACITY). The observer is dropped with
    /// the rejected ring.
    pub fn build(self, storage: &mut [u8]) -> Result<ByteRing<'_, O>, InitError> {
        let mut ring = ByteRing::detached(self.observer);
        ring.init(storage)?;
        Ok(ring)
    }
}
