//! Conversion of raw `(pointer, length)` arguments into views.
//!
//! The view constructors treat a null pointer or an unrepresentable
//! length as fatal. Across the C boundary those are caller mistakes to
//! report, so they are rejected here with
//! [`KeelStatus::InvalidArgument`] before a view is built.

use keel_view::{ReadOnlySpan, Span, Str};

use crate::status::KeelStatus;

fn checked_len(is_null: bool, len: usize) -> Result<isize, KeelStatus> {
    let len = isize::try_from(len).map_err(|_| KeelStatus::InvalidArgument)?;
    if is_null && len > 0 {
        return Err(KeelStatus::InvalidArgument);
    }
    Ok(len)
}

/// Read-only bytes.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be valid for `len` reads for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn bytes<'a>(
    ptr: *const u8,
    len: usize,
) -> Result<ReadOnlySpan<'a, u8>, KeelStatus> {
    let len = checked_len(ptr.is_null(), len)?;
    // SAFETY: length and nullness checked above; validity is the
    // caller's contract.
    Ok(unsafe { ReadOnlySpan::from_raw_parts(ptr, len) })
}

/// Text.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be valid for `len` reads for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn text<'a>(
    ptr: *const u8,
    len: usize,
) -> Result<Str<'a>, KeelStatus> {
    let len = checked_len(ptr.is_null(), len)?;
    // SAFETY: as for `bytes`.
    Ok(unsafe { Str::from_raw_parts(ptr, len) })
}

/// Writable destination bytes.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be valid for `len` reads and writes for `'a`
/// and must not overlap any other argument of the call.
#[allow(unsafe_code)]
pub(crate) unsafe fn bytes_mut<'a>(
    ptr: *mut u8,
    len: usize,
) -> Result<Span<'a, u8>, KeelStatus> {
    let len = checked_len(ptr.is_null(), len)?;
    // SAFETY: as for `bytes`, plus exclusivity from the caller.
    Ok(unsafe { Span::from_raw_parts(ptr, len) })
}
