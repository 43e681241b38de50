//! Codec errors shared by the primitive, varint and record encoders.

use snafu::Snafu;

/// Why a value could not be encoded into, or decoded from, a byte slice.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum BytesError {
    /// The output slice is shorter than the encoding.
    #[snafu(display("output holds {available} bytes, encoding needs {needed}"))]
    BufferTooSmall {
        /// Length of the full encoding.
        needed: usize,
        /// Length of the output slice.
        available: usize,
    },

    /// The input is malformed: an overlong varint, an unknown field or
    /// message type, or a value outside its range.
    #[snafu(display("malformed input: {message}"))]
    InvalidData {
        /// What was wrong.
        message: &'static str,
    },

    /// The input ended in the middle of a value.
    #[snafu(display("input ended after {available} bytes, value needs {needed}"))]
    UnexpectedEof {
        /// Bytes the value needs.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },
}

/// Result of a codec operation.
pub type Result<T> = core::result::Result<T, BytesError>;
