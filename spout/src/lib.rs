//! Item sinks.
//!
//! A [`Spout`] is where a producer puts things it has finished with: ring
//! events, encoded trace records, evicted bytes. The ring crates only ever
//! talk to this trait, so the destination (a `Vec`, a closure, a serial
//! port, stdout) is chosen by the caller.
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod impls;
mod traits;

#[cfg(test)]
mod tests;

pub use impls::*;
pub use traits::Spout;
