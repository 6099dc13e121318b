//! Buffered octet sink over any `std::io::Write`.

use std::io::{self, Write};

use crate::core::range::ByteSink;

/// Octets held before handing a block to the destination.
const FLUSH_THRESHOLD: usize = 4096;

/// Collects octets and writes them through in 4 KiB blocks. Call
/// [`ByteWriter::flush`] when the stream is complete; dropping the writer
/// does not flush.
pub struct ByteWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    written: u64,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(inner: W) -> Self {
        ByteWriter {
            inner,
            buf: Vec::with_capacity(FLUSH_THRESHOLD),
            written: 0,
        }
    }

    /// Octets accepted so far, flushed or not.
    pub fn octets_written(&self) -> u64 {
        self.written
    }

    /// Write out everything buffered and flush the destination.
    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.drain()?;
        Ok(self.inner)
    }

    fn drain(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.inner.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<W: Write> ByteSink for ByteWriter<W> {
    fn put(&mut self, octet: u8) -> io::Result<()> {
        self.buf.push(octet);
        self.written += 1;
        if self.buf.len() >= FLUSH_THRESHOLD {
            self.drain()?;
        }
        Ok(())
    }
}
