//! Little-endian fixed-width binary encode/decode.
//!
//! Every integer is split into bytes with successive 8-bit masks and
//! shifts, least significant byte first. Floats travel as their IEEE-754
//! bit patterns. The named functions (`get_i32_bytes`, `to_i32`,
//! `write_i32`, ...) are thin wrappers over the [`FixedWidth`] trait.
//!
//! `to_*` and `write_*` are indexed accesses: a `start_index` whose
//! value would run past the buffer is fatal. Callers that cannot
//! guarantee the bound use the `try_*` forms.

use keel_core::fatal;

use crate::error::CodecError;

/// A numeric type with a fixed little-endian byte encoding.
pub trait FixedWidth: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Write `Self::WIDTH` bytes into the front of `out`.
    ///
    /// `out` must be at least `WIDTH` bytes long.
    fn encode_le(self, out: &mut [u8]);

    /// Read a value from the first `Self::WIDTH` bytes of `bytes`.
    ///
    /// `bytes` must be at least `WIDTH` bytes long.
    fn decode_le(bytes: &[u8]) -> Self;
}

macro_rules! fixed_width_int {
    ($($t:ty as $u:ty, $n:literal;)*) => {
        $(
            impl FixedWidth for $t {
                const WIDTH: usize = $n;

                #[inline]
                fn encode_le(self, out: &mut [u8]) {
                    let bits = self as $u;
                    for (i, b) in out[..$n].iter_mut().enumerate() {
                        *b = ((bits >> (8 * i)) & 0xFF) as u8;
                    }
                }

                #[inline]
                fn decode_le(bytes: &[u8]) -> Self {
                    let mut bits: $u = 0;
                    for (i, &b) in bytes[..$n].iter().enumerate() {
                        bits |= (b as $u) << (8 * i);
                    }
                    bits as $t
                }
            }
        )*
    };
}

fixed_width_int! {
    u8 as u8, 1;
    i8 as u8, 1;
    u16 as u16, 2;
    i16 as u16, 2;
    u32 as u32, 4;
    i32 as u32, 4;
    u64 as u64, 8;
    i64 as u64, 8;
}

impl FixedWidth for f32 {
    const WIDTH: usize = 4;

    #[inline]
    fn encode_le(self, out: &mut [u8]) {
        float_to_bits(self).encode_le(out);
    }

    #[inline]
    fn decode_le(bytes: &[u8]) -> Self {
        bits_to_float(u32::decode_le(bytes))
    }
}

impl FixedWidth for f64 {
    const WIDTH: usize = 8;

    #[inline]
    fn encode_le(self, out: &mut [u8]) {
        double_to_bits(self).encode_le(out);
    }

    #[inline]
    fn decode_le(bytes: &[u8]) -> Self {
        bits_to_double(u64::decode_le(bytes))
    }
}

// ── Generic indexed access ──────────────────────────────────────

fn check_range<T: FixedWidth>(len: usize, start: usize) -> Result<usize, CodecError> {
    match start.checked_add(T::WIDTH) {
        Some(end) if end <= len => Ok(end),
        _ => Err(CodecError::OutOfBounds {
            start,
            width: T::WIDTH,
            len,
        }),
    }
}

/// Read a `T` at `start`, or an error if it does not fit.
pub fn try_read_le<T: FixedWidth>(bytes: &[u8], start: usize) -> Result<T, CodecError> {
    let end = check_range::<T>(bytes.len(), start)?;
    Ok(T::decode_le(&bytes[start..end]))
}

/// Write `value` at `start`, or an error if it does not fit.
///
/// Nothing is written on error.
pub fn try_write_le<T: FixedWidth>(
    value: T,
    buffer: &mut [u8],
    start: usize,
) -> Result<(), CodecError> {
    let end = check_range::<T>(buffer.len(), start)?;
    value.encode_le(&mut buffer[start..end]);
    Ok(())
}

/// Read a `T` at `start`.
///
/// # Panics
///
/// Panics (the fatal path) if `start + T::WIDTH` exceeds `bytes.len()`.
#[track_caller]
pub fn read_le<T: FixedWidth>(bytes: &[u8], start: usize) -> T {
    match try_read_le(bytes, start) {
        Ok(v) => v,
        Err(e) => fatal(e),
    }
}

/// Write `value` at `start`.
///
/// # Panics
///
/// Panics (the fatal path) if `start + T::WIDTH` exceeds `buffer.len()`.
#[track_caller]
pub fn write_le<T: FixedWidth>(value: T, buffer: &mut [u8], start: usize) {
    if let Err(e) = try_write_le(value, buffer, start) {
        fatal(e)
    }
}

// ── Named per-type entry points ─────────────────────────────────

macro_rules! named_codec {
    ($($t:ty, $n:literal: $get:ident, $to:ident, $try_to:ident, $write:ident, $try_write:ident;)*) => {
        $(
            #[doc = concat!("Little-endian bytes of an `", stringify!($t), "`.")]
            #[inline]
            pub fn $get(value: $t) -> [u8; $n] {
                let mut out = [0u8; $n];
                value.encode_le(&mut out);
                out
            }

            #[doc = concat!("Decode an `", stringify!($t), "` at `start_index`. Fatal if it does not fit.")]
            #[inline]
            #[track_caller]
            pub fn $to(bytes: &[u8], start_index: usize) -> $t {
                read_le(bytes, start_index)
            }

            #[doc = concat!("Decode an `", stringify!($t), "` at `start_index`, or report why it does not fit.")]
            #[inline]
            pub fn $try_to(bytes: &[u8], start_index: usize) -> Result<$t, CodecError> {
                try_read_le(bytes, start_index)
            }

            #[doc = concat!("Encode an `", stringify!($t), "` in place at `start_index`. Fatal if it does not fit.")]
            #[inline]
            #[track_caller]
            pub fn $write(value: $t, buffer: &mut [u8], start_index: usize) {
                write_le(value, buffer, start_index)
            }

            #[doc = concat!("Encode an `", stringify!($t), "` in place at `start_index`, or report why it does not fit.")]
            #[inline]
            pub fn $try_write(value: $t, buffer: &mut [u8], start_index: usize) -> Result<(), CodecError> {
                try_write_le(value, buffer, start_index)
            }
        )*
    };
}

named_codec! {
    u8, 1: get_u8_bytes, to_u8, try_to_u8, write_u8, try_write_u8;
    i8, 1: get_i8_bytes, to_i8, try_to_i8, write_i8, try_write_i8;
    u16, 2: get_u16_bytes, to_u16, try_to_u16, write_u16, try_write_u16;
    i16, 2: get_i16_bytes, to_i16, try_to_i16, write_i16, try_write_i16;
    u32, 4: get_u32_bytes, to_u32, try_to_u32, write_u32, try_write_u32;
    i32, 4: get_i32_bytes, to_i32, try_to_i32, write_i32, try_write_i32;
    u64, 8: get_u64_bytes, to_u64, try_to_u64, write_u64, try_write_u64;
    i64, 8: get_i64_bytes, to_i64, try_to_i64, write_i64, try_write_i64;
    f32, 4: get_f32_bytes, to_f32, try_to_f32, write_f32, try_write_f32;
    f64, 8: get_f64_bytes, to_f64, try_to_f64, write_f64, try_write_f64;
}

// ── IEEE-754 bit reinterpretation ───────────────────────────────

/// The raw bit pattern of an `f32`. NaN payloads and the sign of zero
/// are preserved.
#[inline]
pub fn float_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// The `f32` whose bit pattern is `bits`.
#[inline]
pub fn bits_to_float(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// The raw bit pattern of an `f64`.
#[inline]
pub fn double_to_bits(value: f64) -> u64 {
    value.to_bits()
}

/// The `f64` whose bit pattern is `bits`.
#[inline]
pub fn bits_to_double(bits: u64) -> f64 {
    f64::from_bits(bits)
}
