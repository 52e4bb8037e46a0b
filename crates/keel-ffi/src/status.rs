//! C-compatible status codes.
//!
//! [`KeelStatus`] is a `repr(i32)` enum covering every failure the C API
//! can report, with conversions from the Rust error types.

use keel_codec::{CodecError, Utf8Error};
use keel_core::ViewError;

/// C-compatible status code returned by every FFI function.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeelStatus {
    /// Success.
    Ok = 0,
    /// A pointer is null where data was required, or a length is out of
    /// range.
    InvalidArgument = -1,
    /// The destination buffer is too small for the result.
    BufferTooSmall = -2,
    /// A read or write would run past the end of the buffer.
    OutOfBounds = -3,
    /// The input is not well-formed UTF-8.
    InvalidUtf8 = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&CodecError> for KeelStatus {
    fn from(e: &CodecError) -> Self {
        match e {
            CodecError::OutOfBounds { .. } => KeelStatus::OutOfBounds,
            CodecError::Truncated { .. } => KeelStatus::BufferTooSmall,
        }
    }
}

impl From<&Utf8Error> for KeelStatus {
    fn from(_e: &Utf8Error) -> Self {
        KeelStatus::InvalidUtf8
    }
}

impl From<&ViewError> for KeelStatus {
    fn from(e: &ViewError) -> Self {
        match e {
            ViewError::IndexOutOfBounds { .. } => KeelStatus::OutOfBounds,
            ViewError::NegativeLength { .. } | ViewError::NullPointer { .. } => {
                KeelStatus::InvalidArgument
            }
            ViewError::CapacityExceeded { .. } => KeelStatus::BufferTooSmall,
        }
    }
}
