//! Clock-stamped observation emitter.

use spout::Spout;

use crate::{clock::Clock, observation::Observation, record::TraceRecord};

/// Stamps observations with a [`Clock`] and sends the encoded records to a
/// [`Spout`].
///
/// # Example
///
/// ```
/// use bytering_trace::{FnClock, Tracer};
/// use spout::CollectSpout;
///
/// let mut tracer = Tracer::new(FnClock::new(|| 1_000), CollectSpout::new());
/// tracer.observe(7, 300).unwrap();
///
/// let records = tracer.spout().items();
/// assert_eq!(records[0].as_bytes(), &[0x08, 0x07, 0x10, 0xE8, 0x07, 0x18, 0xAC, 0x02]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracer<C, S> {
    clock: C,
    spout: S,
}

impl<C: Clock, S: Spout<TraceRecord>> Tracer<C, S> {
    /// Create a tracer.
    pub fn new(clock: C, spout: S) -> Self {
        Self { clock, spout }
    }

    /// Stamp `tag` / `value` with the current time without sending it.
    #[must_use]
    pub fn stamp(&self, tag: u32, value: u64) -> Observation {
        Observation::new(tag, self.clock.now_ns(), value)
    }

    /// Record one observation.
    ///
    /// # Errors
    /// Returns the spout's error if it refused the record.
    pub fn observe(&mut self, tag: u32, value: u64) -> Result<(), S::Error> {
        let record = self.stamp(tag, value).to_record();
        self.spout.send(record)
    }

    /// Flush the spout.
    ///
    /// # Errors
    /// Returns the spout's flush error.
    pub fn flush(&mut self) -> Result<(), S::Error> {
        self.spout.flush()
    }

    /// Reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Reference to the spout.
    pub fn spout(&self) -> &S {
        &self.spout
    }

    /// Mutable reference to the spout.
    pub fn spout_mut(&mut self) -> &mut S {
        &mut self.spout
    }

    /// Consume the tracer, returning its clock and spout.
    pub fn into_parts(self) -> (C, S) {
        (self.clock, self.spout)
    }
}
