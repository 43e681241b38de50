//! Byte serialization traits and implementations.
//!
//! This crate provides `ToBytes` and `FromBytes` traits for writing values
//! into caller-provided byte buffers and reading them back. Primitives use a
//! fixed little-endian layout, [`Varint`] uses unsigned LEB128, and fixed
//! `#[repr(C)]` records can lean on the re-exported zerocopy derives.
//!
//! Nothing here allocates; every codec works on borrowed slices.
#![no_std]

mod error;
mod impls;
mod serializer;
mod traits;
mod varint;

pub use error::{BytesError, Result};
pub use serializer::{ByteCursor, ByteReader};
pub use traits::{FromBytes, ToBytes};
pub use varint::{MAX_LEN as VARINT_MAX_LEN, Varint};

// Re-export zerocopy derives for custom #[repr(C)] structs
pub use zerocopy::{
    FromBytes as ZcFromBytes, Immutable, IntoBytes, KnownLayout, Unaligned, byteorder,
};

#[cfg(test)]
mod tests;
