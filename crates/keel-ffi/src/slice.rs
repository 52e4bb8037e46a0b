//! Slice bounds for C callers that keep their own `(pointer, length)`
//! views.
//!
//! C has no unsigned-only view API, so `start` and `len` are signed here.
//! A negative value, an overrun, or an overflowing sum all resolve to the
//! empty view `(0, 0)`, matching the Rust `slice`.

use keel_core::traits::slice_range;

use crate::status::KeelStatus;

fn resolve(view_len: usize, start: isize, len: isize, clamp: bool) -> (usize, usize) {
    let (Ok(start), Ok(len)) = (usize::try_from(start), usize::try_from(len)) else {
        return (0, 0);
    };
    let len = if clamp {
        len.min(view_len.saturating_sub(start))
    } else {
        len
    };
    match slice_range(start, len, view_len) {
        Some(r) => (r.start, r.len()),
        None => (0, 0),
    }
}

/// Bounds of `view[start .. start + len]` for a view of `view_len`
/// elements.
///
/// Writes the resolved start and length; `(0, 0)` means the empty view.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_slice(
    view_len: usize,
    start: isize,
    len: isize,
    start_out: *mut usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if start_out.is_null() || len_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        let (s, n) = resolve(view_len, start, len, false);
        // SAFETY: both out-pointers are non-null and valid per caller contract.
        unsafe {
            *start_out = s;
            *len_out = n;
        }
        KeelStatus::Ok as i32
    })
}

/// Like [`keel_slice`], but a `len` that runs past the end is shortened
/// to what remains.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_slice_clamped(
    view_len: usize,
    start: isize,
    len: isize,
    start_out: *mut usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if start_out.is_null() || len_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        let (s, n) = resolve(view_len, start, len, true);
        // SAFETY: both out-pointers are non-null and valid per caller contract.
        unsafe {
            *start_out = s;
            *len_out = n;
        }
        KeelStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_passes_through() {
        assert_eq!(resolve(10, 2, 3, false), (2, 3));
    }

    #[test]
    fn negatives_are_empty() {
        assert_eq!(resolve(10, -1, 3, false), (0, 0));
        assert_eq!(resolve(10, 2, -3, true), (0, 0));
    }

    #[test]
    fn overrun_is_empty_unless_clamped() {
        assert_eq!(resolve(5, 3, 10, false), (0, 0));
        assert_eq!(resolve(5, 3, 10, true), (3, 2));
        assert_eq!(resolve(5, 6, 1, true), (0, 0));
    }

    #[test]
    fn extern_entry_points() {
        let (mut s, mut n) = (9, 9);
        assert_eq!(keel_slice(5, 1, 2, &mut s, &mut n), KeelStatus::Ok as i32);
        assert_eq!((s, n), (1, 2));
        assert_eq!(
            keel_slice_clamped(5, 4, 100, &mut s, &mut n),
            KeelStatus::Ok as i32
        );
        assert_eq!((s, n), (4, 1));
        assert_eq!(
            keel_slice(5, 0, 1, std::ptr::null_mut(), &mut n),
            KeelStatus::InvalidArgument as i32
        );
    }
}
