//! UTF-8 codec FFI.

use keel_codec::utf8::{self, MAX_SEQUENCE_LEN};

use crate::args;
use crate::status::KeelStatus;

/// Encode `codepoint` into `buf`, writing the byte count to `*written_out`.
///
/// Surrogates and values above U+10FFFF are encoded as U+FFFD. Returns
/// `BufferTooSmall` without writing if the encoding needs more than
/// `cap` bytes.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_utf8_encode(
    codepoint: u32,
    buf: *mut u8,
    cap: usize,
    written_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if written_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        if utf8::encoded_len(codepoint) > cap {
            return KeelStatus::BufferTooSmall as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let mut dest = ffi_try!(unsafe { args::bytes_mut(buf, cap) });
        let n = utf8::encode_codepoint(codepoint, dest.as_mut_slice(), 0);
        // SAFETY: written_out is non-null and valid per caller contract.
        unsafe { *written_out = n };
        KeelStatus::Ok as i32
    })
}

/// Decode the sequence at `buf[offset..]`.
///
/// Malformed input decodes to U+FFFD with one byte consumed, so a caller
/// looping `while (offset < len)` always advances. Returns `OutOfBounds`
/// when `offset >= len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_utf8_decode(
    buf: *const u8,
    len: usize,
    offset: usize,
    codepoint_out: *mut u32,
    consumed_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if codepoint_out.is_null() || consumed_out.is_null() {
            return KeelStatus::InvalidArgument as i32;
        }
        // SAFETY: pointer contract in the crate docs.
        let bytes = ffi_try!(unsafe { args::bytes(buf, len) });
        if offset >= bytes.len() {
            return KeelStatus::OutOfBounds as i32;
        }
        let (cp, n) = utf8::decode_codepoint(bytes.as_slice(), offset, MAX_SEQUENCE_LEN);
        // SAFETY: both out-pointers are non-null and valid per caller contract.
        unsafe {
            *codepoint_out = cp;
            *consumed_out = n;
        }
        KeelStatus::Ok as i32
    })
}

/// Check that `buf[..len]` is well-formed UTF-8.
///
/// On `InvalidUtf8`, writes the offset of the first bad sequence to
/// `*error_offset_out` unless it is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_utf8_validate(
    buf: *const u8,
    len: usize,
    error_offset_out: *mut usize,
) -> i32 {
    ffi_guard!({
        // SAFETY: pointer contract in the crate docs.
        let bytes = ffi_try!(unsafe { args::bytes(buf, len) });
        match utf8::validate(bytes.as_slice()) {
            Ok(()) => KeelStatus::Ok as i32,
            Err(e) => {
                if !error_offset_out.is_null() {
                    // SAFETY: non-null and valid per caller contract.
                    unsafe { *error_offset_out = e.offset() };
                }
                KeelStatus::from(&e) as i32
            }
        }
    })
}
