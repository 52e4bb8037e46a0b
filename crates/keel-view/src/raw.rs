//! Raw `(pointer, length)` entry points.
//!
//! The only module in this crate that dereferences raw pointers. Each
//! function validates the length before building a slice, so a negative
//! length or a null pointer goes down the fatal path instead of
//! producing an invalid slice.

#![allow(unsafe_code)]

use keel_core::{fatal, ViewError};

/// Validate a signed length and the pointer it describes.
///
/// Returns `None` for the empty view (length 0, any pointer).
fn checked_len(is_null: bool, len: isize) -> Option<usize> {
    if len < 0 {
        fatal(ViewError::NegativeLength { len });
    }
    if len == 0 {
        return None;
    }
    let len = len as usize;
    if is_null {
        fatal(ViewError::NullPointer { len });
    }
    Some(len)
}

/// Build a shared slice from a raw pointer and signed length.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be aligned and valid for `len` reads of `T`
/// for all of `'a`, and the memory must not be mutated through another
/// pointer during `'a`.
pub(crate) unsafe fn slice_from_raw<'a, T>(ptr: *const T, len: isize) -> &'a [T] {
    match checked_len(ptr.is_null(), len) {
        None => &[],
        // SAFETY: ptr is non-null and the caller guarantees it is valid
        // for `len` reads for 'a.
        Some(len) => unsafe { std::slice::from_raw_parts(ptr, len) },
    }
}

/// Build a mutable slice from a raw pointer and signed length.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be aligned and valid for `len` reads and
/// writes of `T` for all of `'a`, and no other pointer may access the
/// memory during `'a`.
pub(crate) unsafe fn slice_from_raw_mut<'a, T>(ptr: *mut T, len: isize) -> &'a mut [T] {
    match checked_len(ptr.is_null(), len) {
        None => Default::default(),
        // SAFETY: ptr is non-null and the caller guarantees exclusive
        // access to `len` elements for 'a.
        Some(len) => unsafe { std::slice::from_raw_parts_mut(ptr, len) },
    }
}
