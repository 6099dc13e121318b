//! Buffered octet source over any `std::io::Read`.

use std::io::{self, Read, Seek, SeekFrom};

use crate::core::range::ByteSource;
use crate::core::ring::CyclicDeque;

/// Octets pulled from the source per refill.
const WINDOW_LEN: usize = 4096;
const WINDOW_PAD: usize = 4;

/// Reads the source in 4 KiB chunks and hands out octets one at a time
/// through [`ByteSource`]. Whatever the codec did not consume can be pushed
/// back onto a seekable source with [`ByteReader::rewind_unread`], leaving
/// the source positioned right after the last octet actually used.
pub struct ByteReader<R> {
    inner: R,
    window: CyclicDeque<u8>,
    consumed: u64,
    eof: bool,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        let mut window = CyclicDeque::new();
        window.resize(WINDOW_LEN, WINDOW_PAD);
        ByteReader {
            inner,
            window,
            consumed: 0,
            eof: false,
        }
    }

    /// Octets handed out so far.
    pub fn octets_read(&self) -> u64 {
        self.consumed
    }

    /// Octets sitting in the window that nothing has consumed yet.
    pub fn buffered(&self) -> usize {
        self.window.len()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<()> {
        if self.eof {
            return Ok(());
        }
        let mut chunk = [0u8; WINDOW_LEN];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.window.push_n(&chunk[..n]);
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read + Seek> ByteReader<R> {
    /// Seek the source back over buffered octets that were never consumed.
    pub fn rewind_unread(&mut self) -> io::Result<()> {
        let unread = self.window.len();
        if unread > 0 {
            self.inner.seek(SeekFrom::Current(-(unread as i64)))?;
            self.window.pop_front(unread);
        }
        Ok(())
    }
}

impl<R: Read> ByteSource for ByteReader<R> {
    fn get(&mut self) -> io::Result<Option<u8>> {
        if self.window.is_empty() {
            self.refill()?;
            if self.window.is_empty() {
                return Ok(None);
            }
        }
        let octet = self.window.front();
        self.window.pop_front(1);
        self.consumed += 1;
        Ok(Some(octet))
    }
}
