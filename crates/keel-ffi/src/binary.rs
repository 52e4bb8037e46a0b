//! Little-endian fixed-width codec FFI.
//!
//! One read and one write function per type, so cbindgen sees each
//! symbol. Reads and writes past the end of the buffer return
//! `OutOfBounds` and touch nothing.

use keel_codec::binary::{try_read_le, try_write_le};
use keel_codec::FixedWidth;

use crate::args;
use crate::status::KeelStatus;

#[allow(unsafe_code)]
fn read_into<T: FixedWidth>(buf: *const u8, len: usize, start: usize, out: *mut T) -> i32 {
    if out.is_null() {
        return KeelStatus::InvalidArgument as i32;
    }
    // SAFETY: pointer contract in the crate docs.
    let bytes = ffi_try!(unsafe { args::bytes(buf, len) });
    match try_read_le::<T>(bytes.as_slice(), start) {
        Ok(value) => {
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = value };
            KeelStatus::Ok as i32
        }
        Err(e) => KeelStatus::from(&e) as i32,
    }
}

#[allow(unsafe_code)]
fn write_from<T: FixedWidth>(value: T, buf: *mut u8, len: usize, start: usize) -> i32 {
    // SAFETY: pointer contract in the crate docs.
    let mut dest = ffi_try!(unsafe { args::bytes_mut(buf, len) });
    match try_write_le(value, dest.as_mut_slice(), start) {
        Ok(()) => KeelStatus::Ok as i32,
        Err(e) => KeelStatus::from(&e) as i32,
    }
}

/// Read a little-endian `u8` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_u8(buf: *const u8, len: usize, start: usize, out: *mut u8) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `u8` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_u8(value: u8, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `i8` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_i8(buf: *const u8, len: usize, start: usize, out: *mut i8) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `i8` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_i8(value: i8, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `u16` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_u16(buf: *const u8, len: usize, start: usize, out: *mut u16) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `u16` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_u16(value: u16, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `i16` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_i16(buf: *const u8, len: usize, start: usize, out: *mut i16) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `i16` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_i16(value: i16, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `u32` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_u32(buf: *const u8, len: usize, start: usize, out: *mut u32) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `u32` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_u32(value: u32, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `i32` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_i32(buf: *const u8, len: usize, start: usize, out: *mut i32) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `i32` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_i32(value: i32, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `u64` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_u64(buf: *const u8, len: usize, start: usize, out: *mut u64) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `u64` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_u64(value: u64, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `i64` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_i64(buf: *const u8, len: usize, start: usize, out: *mut i64) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `i64` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_i64(value: i64, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `f32` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_f32(buf: *const u8, len: usize, start: usize, out: *mut f32) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `f32` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_f32(value: f32, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

/// Read a little-endian `f64` from `buf[start..]` into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_read_f64(buf: *const u8, len: usize, start: usize, out: *mut f64) -> i32 {
    ffi_guard!({ read_into(buf, len, start, out) })
}

/// Write `value` as a little-endian `f64` at `buf[start..]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_write_f64(value: f64, buf: *mut u8, len: usize, start: usize) -> i32 {
    ffi_guard!({ write_from(value, buf, len, start) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_i32_round_trip() {
        let mut buf = [0u8; 4];
        assert_eq!(keel_write_i32(-1, buf.as_mut_ptr(), 4, 0), KeelStatus::Ok as i32);
        assert_eq!(buf, [0xFF; 4]);
        let mut v = 0i32;
        assert_eq!(keel_read_i32(buf.as_ptr(), 4, 0, &mut v), KeelStatus::Ok as i32);
        assert_eq!(v, -1);
    }

    #[test]
    fn read_past_end_is_out_of_bounds() {
        let buf = [0u8; 5];
        let mut v = 0u32;
        assert_eq!(
            keel_read_u32(buf.as_ptr(), 5, 2, &mut v),
            KeelStatus::OutOfBounds as i32
        );
        assert_eq!(
            keel_read_u64(buf.as_ptr(), 5, usize::MAX, std::ptr::null_mut()),
            KeelStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn write_past_end_leaves_buffer() {
        let mut buf = [7u8; 3];
        assert_eq!(
            keel_write_u16(0xBEEF, buf.as_mut_ptr(), 3, 2),
            KeelStatus::OutOfBounds as i32
        );
        assert_eq!(buf, [7, 7, 7]);
    }

    #[test]
    fn overflowing_start_is_out_of_bounds() {
        let mut buf = [0u8; 8];
        assert_eq!(
            keel_write_u64(1, buf.as_mut_ptr(), 8, usize::MAX),
            KeelStatus::OutOfBounds as i32
        );
    }

    #[test]
    fn float_bits_survive() {
        let mut buf = [0u8; 8];
        keel_write_f64(-0.0, buf.as_mut_ptr(), 8, 0);
        let mut v = 1.0f64;
        keel_read_f64(buf.as_ptr(), 8, 0, &mut v);
        assert_eq!(v.to_bits(), (-0.0f64).to_bits());
    }
}
