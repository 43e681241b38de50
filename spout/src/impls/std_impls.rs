use std::io::{self, Write};

use crate::Spout;

/// Writes each byte item as one line of upper-case hex.
///
/// Bytes are separated by a single space, e.g. `08 01 10 00 18 04`.
/// This is the human-readable end of a trace pipeline: point it at
/// `io::stdout()` or a log file.
///
/// # Example
///
/// ```
/// use spout::{HexSpout, Spout};
///
/// let mut spout = HexSpout::new(Vec::new());
/// spout.send(&[0x08, 0xAC, 0x02][..]).unwrap();
/// assert_eq!(spout.into_inner(), b"08 AC 02\n");
/// ```
#[derive(Debug)]
pub struct HexSpout<W> {
    writer: W,
}

impl<W: Write> HexSpout<W> {
    /// Create a hex spout writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the spout and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<T: AsRef<[u8]>, W: Write> Spout<T> for HexSpout<W> {
    type Error = io::Error;

    fn send(&mut self, item: T) -> Result<(), io::Error> {
        let bytes = item.as_ref();
        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b" ")?;
            }
            write!(self.writer, "{byte:02X}")?;
        }
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }
}
