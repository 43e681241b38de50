//! Diagnostic tracing for [`bytering_core`] rings.
//!
//! Two wire formats live here:
//!
//! - [`Observation`]: a `(tag, timestamp, value)` triple encoded as tagged
//!   LEB128 varints, at most 28 bytes. [`Tracer`] stamps observations with an
//!   injected [`Clock`] and sends them to any [`Spout`](spout::Spout) as
//!   [`TraceRecord`]s; [`TraceObserver`] does that for every ring event.
//! - [`Message`]: fixed-layout little-endian records for link setup, clock
//!   sync and fixed-width observations.
//!
//! # Example
//!
//! ```
//! use bytering_core::ByteRing;
//! use bytering_trace::{FnClock, TraceObserver, Tracer};
//! use spout::CollectSpout;
//!
//! let clock = FnClock::new(|| 5);
//! let mut storage = [0u8; 4];
//! let mut ring = ByteRing::builder()
//!     .observer(TraceObserver::new(Tracer::new(clock, CollectSpout::new())))
//!     .build(&mut storage)
//!     .unwrap();
//!
//! ring.write(b"hello");
//!
//! let (_, spout) = ring.detach_observer().unwrap().into_tracer().into_parts();
//! let decoded: Vec<_> = spout
//!     .into_items()
//!     .iter()
//!     .map(|record| record.decode().unwrap())
//!     .map(|obs| (obs.tag, obs.timestamp, obs.value))
//!     .collect();
//! assert_eq!(decoded, [(1, 5, 4), (3, 5, 4)]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod clock;
mod observation;
mod observer;
mod proto;
mod record;
mod tracer;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use clock::{Clock, FnClock, ZeroClock};
pub use observation::{Observation, TAG_KEY, TIMESTAMP_KEY, VALUE_KEY};
pub use observer::{EventTags, TraceObserver};
pub use proto::{Message, MessageType};
pub use record::{RECORD_CAPACITY, TraceRecord};
pub use tracer::Tracer;
