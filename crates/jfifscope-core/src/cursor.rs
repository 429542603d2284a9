//! Random-access cursor over an in-memory byte buffer.
//!
//! The parser only needs the [`ByteSource`] capability; [`ByteCursor`] is the
//! implementation backed by a shared [`Bytes`] buffer.

use bytes::Bytes;
use std::io::SeekFrom;

/// Readable byte buffer with position tracking.
pub trait ByteSource {
    /// Copy up to `count` bytes into `destination`, starting at its offset 0.
    ///
    /// Returns the number of bytes copied. Zero means end of data (or
    /// `count == 0`), not an error.
    fn read(&mut self, destination: &mut [u8], count: usize) -> usize;

    /// Move the position; the result is clamped into `[0, len]`.
    fn seek(&mut self, pos: SeekFrom) -> usize;

    /// Current position.
    fn tell(&self) -> usize;

    /// Total buffer length.
    fn len(&self) -> usize;

    /// The full buffer the source reads from.
    fn underlying_buffer(&self) -> &Bytes;

    /// Seek back to the start.
    fn rewind(&mut self) {
        self.seek(SeekFrom::Start(0));
    }

    /// Whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left between the position and the end.
    fn remaining(&self) -> usize {
        self.len().saturating_sub(self.tell())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, destination: &mut [u8], count: usize) -> usize {
        (**self).read(destination, count)
    }

    fn seek(&mut self, pos: SeekFrom) -> usize {
        (**self).seek(pos)
    }

    fn tell(&self) -> usize {
        (**self).tell()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn underlying_buffer(&self) -> &Bytes {
        (**self).underlying_buffer()
    }
}

/// Cursor over an immutable byte buffer.
///
/// Cloning is cheap and yields an independent position over the same buffer.
#[derive(Debug, Clone, Default)]
pub struct ByteCursor {
    buffer: Bytes,
    position: usize,
}

impl ByteCursor {
    /// Create a cursor positioned at the start of `buffer`.
    pub fn new(buffer: impl Into<Bytes>) -> Self {
        Self {
            buffer: buffer.into(),
            position: 0,
        }
    }

    /// Consume the cursor and return its buffer.
    pub fn into_inner(self) -> Bytes {
        self.buffer
    }
}

impl ByteSource for ByteCursor {
    fn read(&mut self, destination: &mut [u8], count: usize) -> usize {
        let len = self.buffer.len();
        if count == 0 || self.position >= len {
            return 0;
        }

        let n = count.min(destination.len()).min(len - self.position);
        destination[..n].copy_from_slice(&self.buffer[self.position..self.position + n]);
        self.position += n;
        n
    }

    fn seek(&mut self, pos: SeekFrom) -> usize {
        let len = self.buffer.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(offset) => self.position as i128 + offset as i128,
            SeekFrom::End(offset) => len + offset as i128,
        };

        self.position = target.clamp(0, len) as usize;
        self.position
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn underlying_buffer(&self) -> &Bytes {
        &self.buffer
    }
}

impl From<Bytes> for ByteCursor {
    fn from(buffer: Bytes) -> Self {
        Self::new(buffer)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(buffer: Vec<u8>) -> Self {
        Self::new(buffer)
    }
}

impl From<&'static [u8]> for ByteCursor {
    fn from(buffer: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(buffer))
    }
}
