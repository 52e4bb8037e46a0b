//! Text FFI: counting, search, comparison, trim, concat, replace.
//!
//! Inputs are byte ranges presumed to hold UTF-8. Results that are views
//! of the input come back as `(start, len)` offsets into it; results that
//! are new text are written into a caller destination buffer.

use keel_view::{compose, Str};

use crate::args;
use crate::status::KeelStatus;

/// Number of codepoints in `ptr[..len]`.
///
/// Each malformed byte counts as one U+FFFD.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_codepoint_count(
    ptr: *const u8,
    len: usize,
    count_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if count_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let s = ffi_try!(unsafe { args::text(ptr, len) });
        // SAFETY: count_out is non-null and valid per caller contract.
        unsafe { *count_out = s.codepoint_count() };
        KeelStatus::Ok as i32
    })
}

/// 1 if every byte of `ptr[..len]` is below 0x80, else 0.
///
/// **Ambiguity warning:** also returns 0 for an invalid argument.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_is_ascii(ptr: *const u8, len: usize) -> u8 {
    ffi_guard_or!(0, {
        // SAFETY: pointer contract in the crate docs.
        match unsafe { args::text(ptr, len) } {
            Ok(s) => u8::from(s.is_ascii()),
            Err(_) => 0,
        }
    })
}

/// Byte offset of the first occurrence of `needle` in `hay`, or -1.
///
/// An empty needle is found at 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_index_of(
    hay: *const u8,
    hay_len: usize,
    needle: *const u8,
    needle_len: usize,
    index_out: *mut isize,
) -> i32 {
    ffi_guard!({
        if index_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let hay = ffi_try!(unsafe { args::text(hay, hay_len) });
        // SAFETY: pointer contract in the crate docs.
        let needle = ffi_try!(unsafe { args::text(needle, needle_len) });
        let index = hay.index_of(needle).map_or(-1, |i| i as isize);
        // SAFETY: index_out is non-null and valid per caller contract.
        unsafe { *index_out = index };
        KeelStatus::Ok as i32
    })
}

/// Byte offset of the last occurrence of `needle` in `hay`, or -1.
///
/// An empty needle is found at `hay_len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_last_index_of(
    hay: *const u8,
    hay_len: usize,
    needle: *const u8,
    needle_len: usize,
    index_out: *mut isize,
) -> i32 {
    ffi_guard!({
        if index_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let hay = ffi_try!(unsafe { args::text(hay, hay_len) });
        // SAFETY: pointer contract in the crate docs.
        let needle = ffi_try!(unsafe { args::text(needle, needle_len) });
        let index = hay.last_index_of(needle).map_or(-1, |i| i as isize);
        // SAFETY: index_out is non-null and valid per caller contract.
        unsafe { *index_out = index };
        KeelStatus::Ok as i32
    })
}

/// Byte-wise comparison: writes -1, 0 or 1 to `order_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_compare(
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
    order_out: *mut i32,
) -> i32 {
    ffi_guard!({
        if order_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let a = ffi_try!(unsafe { args::text(a, a_len) });
        // SAFETY: pointer contract in the crate docs.
        let b = ffi_try!(unsafe { args::text(b, b_len) });
        // SAFETY: order_out is non-null and valid per caller contract.
        unsafe { *order_out = a.compare(b) as i32 };
        KeelStatus::Ok as i32
    })
}

/// Offsets of `ptr[..len]` with ASCII whitespace removed from both ends.
///
/// The trimmed text is `ptr[*start_out .. *start_out + *len_out]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_trim(
    ptr: *const u8,
    len: usize,
    start_out: *mut usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if start_out.is_null() || len_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let s = ffi_try!(unsafe { args::text(ptr, len) });
        let start = len - s.trim_start().byte_length();
        let trimmed = s.trim().byte_length();
        // SAFETY: both out-pointers are non-null and valid per caller contract.
        unsafe {
            *start_out = start;
            *len_out = trimmed;
        }
        KeelStatus::Ok as i32
    })
}

/// Write `a` followed by `b` into `dest`.
///
/// Returns `BufferTooSmall`, writing nothing, if `a_len + b_len`
/// exceeds `dest_cap`. On success `*len_out` is `a_len + b_len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_str_concat(
    dest: *mut u8,
    dest_cap: usize,
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let a = ffi_try!(unsafe { args::text(a, a_len) });
        // SAFETY: pointer contract in the crate docs.
        let b = ffi_try!(unsafe { args::text(b, b_len) });
        // SAFETY: pointer contract in the crate docs; dest does not
        // overlap a or b.
        let dest = ffi_try!(unsafe { args::bytes_mut(dest, dest_cap) });
        match compose::try_concat(dest.into_mut_slice(), a, b) {
            Ok(out) => {
                // SAFETY: len_out is non-null and valid per caller contract.
                unsafe { *len_out = out.byte_length() };
                KeelStatus::Ok as i32
            }
            Err(e) => KeelStatus::from(&e) as i32,
        }
    })
}

/// Copy `original` into `dest`, replacing each occurrence of `old` with
/// `new`.
///
/// Stops at the first piece that does not fit and reports how much was
/// written in `*len_out`; this is not an error. An empty `old` copies
/// `original` unchanged.
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn keel_str_replace(
    dest: *mut u8,
    dest_cap: usize,
    original: *const u8,
    original_len: usize,
    old: *const u8,
    old_len: usize,
    new: *const u8,
    new_len: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let original = ffi_try!(unsafe { args::text(original, original_len) });
        // SAFETY: pointer contract in the crate docs.
        let old = ffi_try!(unsafe { args::text(old, old_len) });
        // SAFETY: pointer contract in the crate docs.
        let new = ffi_try!(unsafe { args::text(new, new_len) });
        // SAFETY: pointer contract in the crate docs; dest does not
        // overlap the inputs.
        let dest = ffi_try!(unsafe { args::bytes_mut(dest, dest_cap) });
        let out: Str<'_> = compose::replace(dest.into_mut_slice(), original, old, new);
        // SAFETY: len_out is non-null and valid per caller contract.
        unsafe { *len_out = out.byte_length() };
        KeelStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_count_of_euro() {
        let s = "a\u{20ac}";
        let mut n = 0usize;
        let rc = keel_str_codepoint_count(s.as_ptr(), s.len(), &mut n);
        assert_eq!(rc, KeelStatus::Ok as i32);
        assert_eq!(n, 2);
    }

    #[test]
    fn null_out_pointer_is_invalid() {
        let rc = keel_str_codepoint_count(b"x".as_ptr(), 1, std::ptr::null_mut());
        assert_eq!(rc, KeelStatus::InvalidArgument as i32);
    }

    #[test]
    fn null_input_with_len_is_invalid() {
        let mut n = 0usize;
        let rc = keel_str_codepoint_count(std::ptr::null(), 3, &mut n);
        assert_eq!(rc, KeelStatus::InvalidArgument as i32);
    }

    #[test]
    fn null_input_with_zero_len_is_empty() {
        let mut n = 7usize;
        let rc = keel_str_codepoint_count(std::ptr::null(), 0, &mut n);
        assert_eq!(rc, KeelStatus::Ok as i32);
        assert_eq!(n, 0);
        assert_eq!(keel_str_is_ascii(std::ptr::null(), 0), 1);
    }

    #[test]
    fn index_of_reports_minus_one() {
        let hay = b"hello";
        let mut i = 0isize;
        keel_str_index_of(hay.as_ptr(), 5, b"ll".as_ptr(), 2, &mut i);
        assert_eq!(i, 2);
        keel_str_index_of(hay.as_ptr(), 5, b"z".as_ptr(), 1, &mut i);
        assert_eq!(i, -1);
        keel_str_last_index_of(hay.as_ptr(), 5, b"l".as_ptr(), 1, &mut i);
        assert_eq!(i, 3);
    }

    #[test]
    fn compare_maps_ordering() {
        let mut o = 9;
        keel_str_compare(b"app".as_ptr(), 3, b"apple".as_ptr(), 5, &mut o);
        assert_eq!(o, -1);
        keel_str_compare(b"b".as_ptr(), 1, b"a".as_ptr(), 1, &mut o);
        assert_eq!(o, 1);
        keel_str_compare(std::ptr::null(), 0, std::ptr::null(), 0, &mut o);
        assert_eq!(o, 0);
    }

    #[test]
    fn trim_reports_offsets() {
        let s = b"  hi \n";
        let (mut start, mut len) = (0, 0);
        keel_str_trim(s.as_ptr(), s.len(), &mut start, &mut len);
        assert_eq!((start, len), (2, 2));
    }

    #[test]
    fn concat_into_buffer() {
        let mut dest = [0u8; 8];
        let mut n = 0;
        let rc = keel_str_concat(
            dest.as_mut_ptr(),
            8,
            b"ab".as_ptr(),
            2,
            b"cd".as_ptr(),
            2,
            &mut n,
        );
        assert_eq!(rc, KeelStatus::Ok as i32);
        assert_eq!(&dest[..n], b"abcd");
    }

    #[test]
    fn concat_too_small() {
        let mut dest = [0u8; 3];
        let mut n = 0;
        let rc = keel_str_concat(
            dest.as_mut_ptr(),
            3,
            b"ab".as_ptr(),
            2,
            b"cd".as_ptr(),
            2,
            &mut n,
        );
        assert_eq!(rc, KeelStatus::BufferTooSmall as i32);
        assert_eq!(dest, [0, 0, 0]);
    }

    #[test]
    fn replace_into_buffer() {
        let mut dest = [0u8; 16];
        let mut n = 0;
        let src = b"a.b.c";
        let rc = keel_str_replace(
            dest.as_mut_ptr(),
            dest.len(),
            src.as_ptr(),
            src.len(),
            b".".as_ptr(),
            1,
            b"--".as_ptr(),
            2,
            &mut n,
        );
        assert_eq!(rc, KeelStatus::Ok as i32);
        assert_eq!(&dest[..n], b"a--b--c");
    }
}
