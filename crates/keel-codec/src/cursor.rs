//! Sequential readers and writers over caller-owned byte buffers.
//!
//! These follow the non-fatal policy: a read that needs more bytes than
//! remain returns `None` (or a [`CodecError`] for writes) and leaves the
//! position unchanged, so parsing code can probe "are there 4 more
//! bytes?" without a separate length check. Length-prefixed fields use
//! a `u32` little-endian prefix.

use crate::binary::FixedWidth;
use crate::error::CodecError;

/// Forward-only reader over a byte slice.
#[derive(Clone, Copy, Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Start reading at offset 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed tail.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Consume the next `n` bytes without copying.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let out = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Some(out)
    }

    /// Decode the next fixed-width value.
    pub fn read<T: FixedWidth>(&mut self) -> Option<T> {
        self.take(T::WIDTH).map(T::decode_le)
    }

    /// Decode the next value without consuming it.
    pub fn peek<T: FixedWidth>(&self) -> Option<T> {
        let mut probe = *self;
        probe.read()
    }

    /// Skip `n` bytes. Returns `false` and stays put if fewer remain.
    pub fn skip(&mut self, n: usize) -> bool {
        self.take(n).is_some()
    }

    /// Read a `u32`-length-prefixed byte run.
    ///
    /// On truncation the reader is left where it was, prefix included.
    pub fn read_length_prefixed(&mut self) -> Result<&'a [u8], CodecError> {
        let start = self.pos;
        let len = self.read::<u32>().ok_or(CodecError::Truncated {
            needed: 4,
            available: self.remaining(),
        })? as usize;
        match self.take(len) {
            Some(bytes) => Ok(bytes),
            None => {
                let available = self.remaining();
                self.pos = start;
                Err(CodecError::Truncated {
                    needed: len,
                    available,
                })
            }
        }
    }
}

/// Forward-only writer into a caller-supplied buffer.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Start writing at offset 0.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Room left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Give up the writer, returning the written prefix for the
    /// buffer's full lifetime.
    pub fn into_written(self) -> &'a [u8] {
        let pos = self.pos;
        let buf: &'a [u8] = self.buf;
        &buf[..pos]
    }

    fn reserve(&mut self, n: usize) -> Result<&mut [u8], CodecError> {
        if n > self.remaining() {
            return Err(CodecError::OutOfBounds {
                start: self.pos,
                width: n,
                len: self.buf.len(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..start + n])
    }

    /// Append a fixed-width value. Nothing is written on error.
    pub fn put<T: FixedWidth>(&mut self, value: T) -> Result<(), CodecError> {
        value.encode_le(self.reserve(T::WIDTH)?);
        Ok(())
    }

    /// Append raw bytes. Nothing is written on error.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Append a `u32` length prefix followed by `bytes`.
    ///
    /// Either both are written or neither is.
    pub fn put_length_prefixed(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let len = u32::try_from(bytes.len()).map_err(|_| CodecError::OutOfBounds {
            start: self.pos,
            width: bytes.len(),
            len: u32::MAX as usize,
        })?;
        let needed = 4 + bytes.len();
        if needed > self.remaining() {
            return Err(CodecError::OutOfBounds {
                start: self.pos,
                width: needed,
                len: self.buf.len(),
            });
        }
        self.put(len)?;
        self.put_bytes(bytes)
    }
}
