//! Error types for ring configuration and the sink adapter.

use snafu::Snafu;

/// Why [`ByteRing::init`](crate::ByteRing::init) rejected its storage.
///
/// A rejected ring stays invalid: every operation returns the empty-ring
/// default until `init` succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum InitError {
    /// Storage was empty.
    #[snafu(display("ring storage is empty"))]
    ZeroCapacity,

    /// Storage is longer than the ring can index.
    #[snafu(display("ring storage of {capacity} bytes exceeds the {max} byte maximum"))]
    CapacityTooLarge {
        /// Length of the rejected storage.
        capacity: usize,
        /// Largest accepted length.
        max: usize,
    },
}

/// A byte item only partly fit when the ring was used as a [`Spout`](spout::Spout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum WriteError {
    /// Fewer bytes were accepted than offered.
    #[snafu(display("ring accepted {written} of {requested} bytes"))]
    Truncated {
        /// Bytes copied into the ring.
        written: usize,
        /// Bytes offered.
        requested: usize,
    },
}
