//! A no_std byte ring buffer over caller-owned storage.
//!
//! Re-exports [`bytering_core`] and, with the `trace` feature, the diagnostic
//! encoders from `bytering_trace` under [`trace`].

#![no_std]

pub use bytering_core::*;

pub use spout;

/// Observation tracing and fixed-layout messages.
#[cfg(feature = "trace")]
pub mod trace {
    pub use bytecast::{BytesError, FromBytes, ToBytes, Varint};
    pub use bytering_trace::*;
}

/// Prelude for convenient imports.
pub mod prelude {
    #[cfg(target_has_atomic = "ptr")]
    pub use crate::{Consumer, Producer};
    pub use crate::{
        ByteConsumer, ByteProducer, ByteRing, InitError, NoObserver, Observer, RingInfo,
        RingState,
    };
    pub use spout::Spout;

    #[cfg(feature = "trace")]
    pub use crate::trace::{Clock, TraceObserver, Tracer};
}
