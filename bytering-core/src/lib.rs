//! Fixed-capacity byte ring buffer over caller-owned storage.
//!
//! [`ByteRing`] borrows a `&mut [u8]` and moves bytes through it in FIFO
//! order without allocating. It is meant for handing bytes between two
//! contexts, such as an interrupt handler filling a receive queue and a main
//! loop draining it.
//!
//! Occupancy is tracked as a write cursor plus an explicit byte count, so the
//! whole storage is usable: a ring over 8 bytes holds 8 bytes.
//!
//! An optional [`Observer`] receives init, clear, write and read
//! notifications after each state change has been committed.
//!
//! # Example
//!
//! ```
//! use bytering_core::ByteRing;
//!
//! let mut storage = [0u8; 8];
//! let mut ring = ByteRing::new(&mut storage).unwrap();
//!
//! assert_eq!(ring.write(b"hello"), 5);
//! let mut out = [0u8; 5];
//! assert_eq!(ring.read(&mut out), 5);
//! assert_eq!(&out, b"hello");
//! assert!(ring.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod builder;
mod error;
mod index;
mod observer;
mod read;
mod ring;
#[cfg(target_has_atomic = "ptr")]
mod spsc;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::RingBuilder;
pub use error::{InitError, WriteError};
pub use observer::{CountingObserver, NoObserver, Observer, RingEvent, RingState, SpoutObserver};
pub use ring::{ByteRing, MAX_CAPACITY};
#[cfg(target_has_atomic = "ptr")]
pub use spsc::{Consumer, Producer};
pub use traits::{ByteConsumer, ByteProducer, RingInfo};
