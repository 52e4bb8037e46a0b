//! Codec error types.

use std::error::Error;
use std::fmt;

/// A fixed-width read or write that does not fit in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// `start + width` runs past the end of the buffer.
    OutOfBounds {
        /// Requested start index.
        start: usize,
        /// Width of the value in bytes.
        width: usize,
        /// Length of the buffer.
        len: usize,
    },
    /// A length prefix announced more bytes than remain.
    Truncated {
        /// Bytes the prefix announced.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { start, width, len } => write!(
                f,
                "{width}-byte access at index {start} exceeds buffer length {len}"
            ),
            Self::Truncated { needed, available } => write!(
                f,
                "truncated input: needed {needed} bytes, {available} available"
            ),
        }
    }
}

impl Error for CodecError {}

/// Malformed UTF-8 found by [`crate::utf8::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utf8Error {
    /// Invalid lead byte, bad continuation byte, overlong form,
    /// surrogate, or a value above U+10FFFF.
    InvalidSequence {
        /// Byte offset of the sequence's lead byte.
        offset: usize,
    },
    /// A well-formed prefix cut off by the end of input.
    Truncated {
        /// Byte offset of the sequence's lead byte.
        offset: usize,
    },
}

impl Utf8Error {
    /// Byte offset where the bad sequence starts.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidSequence { offset } | Self::Truncated { offset } => *offset,
        }
    }
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSequence { offset } => {
                write!(f, "invalid UTF-8 sequence at byte {offset}")
            }
            Self::Truncated { offset } => {
                write!(f, "truncated UTF-8 sequence at byte {offset}")
            }
        }
    }
}

impl Error for Utf8Error {}
