//! Fixed-size frame for one encoded observation.

use core::fmt;

use bytecast::{BytesError, FromBytes, Varint};

use crate::observation::{Observation, TAG_KEY, TIMESTAMP_KEY, VALUE_KEY};

/// Size of the frame backing a [`TraceRecord`].
pub const RECORD_CAPACITY: usize = 32;

/// An encoded [`Observation`] held inline, ready to hand to a byte sink.
///
/// `Copy` and allocation-free, so it can pass through a
/// [`Spout`](spout::Spout) on targets without a heap.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    buf: [u8; RECORD_CAPACITY],
    len: u8,
}

impl TraceRecord {
    /// Encode `obs`.
    #[must_use]
    pub fn new(obs: &Observation) -> Self {
        let mut record = Self {
            buf: [0; RECORD_CAPACITY],
            len: 0,
        };
        record.push_field(TAG_KEY, u64::from(obs.tag));
        record.push_field(TIMESTAMP_KEY, obs.timestamp);
        record.push_field(VALUE_KEY, obs.value);
        record
    }

    // Observation::MAX_ENCODED_LEN < RECORD_CAPACITY, so three fields always fit.
    fn push_field(&mut self, key: u8, value: u64) {
        let (bytes, n) = Varint(value).to_array();
        let start = usize::from(self.len);
        self.buf[start] = key;
        self.buf[start + 1..start + 1 + n].copy_from_slice(&bytes[..n]);
        self.len += (1 + n) as u8;
    }

    /// The encoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// Encoded length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// True if nothing is encoded. Records built from an observation never are.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode the observation back out.
    ///
    /// # Errors
    /// Never fails for records built with [`new`](Self::new); the `Result`
    /// comes from the shared [`FromBytes`] decoder.
    pub fn decode(&self) -> Result<Observation, BytesError> {
        Observation::from_bytes(self.as_bytes()).map(|(obs, _)| obs)
    }
}

impl From<Observation> for TraceRecord {
    fn from(obs: Observation) -> Self {
        Self::new(&obs)
    }
}

impl AsRef<[u8]> for TraceRecord {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TraceRecord").field(&self.as_bytes()).finish()
    }
}
