//! C ABI for the Keel substrate.
//!
//! Every exported function is `extern "C"`, takes caller memory as raw
//! `(pointer, length)` pairs and returns an `i32` [`KeelStatus`]. Results
//! go through out-pointers, which are checked for null before any work
//! is done. A panic anywhere below the boundary is caught by
//! `ffi_guard!` and reported as [`KeelStatus::Panicked`]; its message is
//! kept per thread and read back with [`keel_last_panic_message`].
//!
//! # Pointer contract
//!
//! For every `(ptr, len)` pair: if `len > 0`, `ptr` must be valid for
//! `len` bytes for the duration of the call. A null `ptr` is accepted
//! only with `len == 0`. Destination buffers must not overlap inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, mapping a caught panic to [`KeelStatus::Panicked`].
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $crate::status::KeelStatus::Panicked as i32
            }
        }
    };
}

/// Like `ffi_guard!` for functions that return a plain value, using
/// `$default` if the body panics.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $default
            }
        }
    };
}

/// Unwrap an argument conversion, returning its status code on failure.
macro_rules! ffi_try {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(status) => return status as i32,
        }
    };
}

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

thread_local! {
    /// Message of the most recent panic caught on this thread.
    static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store the message carried by a caught panic payload.
pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with a non-string payload".to_owned()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

/// Copy the message of the last panic caught on this thread into `buf`.
///
/// Writes at most `cap - 1` bytes plus a NUL terminator. Returns the full
/// message length in bytes, so a call with a null `buf` sizes the buffer.
/// Returns 0 if no panic has been caught on this thread.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn keel_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let msg = cell.borrow();
        let bytes = msg.as_bytes();
        if !buf.is_null() && cap > 0 {
            let copy_len = bytes.len().min(cap - 1);
            // SAFETY: buf points to cap valid bytes per caller contract.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), copy_len);
                *buf.add(copy_len) = 0;
            }
        }
        i32::try_from(bytes.len()).unwrap_or(i32::MAX)
    })
}

mod args;
pub mod binary;
pub mod slice;
pub mod status;
pub mod text;
pub mod utf8;

pub use status::KeelStatus;
