//! Text composition into caller-supplied buffers.
//!
//! Nothing here allocates. Each function writes into `dest` and returns a
//! [`Str`] over the bytes it wrote, borrowed from `dest`.
//!
//! The concat family is all-or-nothing: if the parts do not fit, `dest`
//! is left untouched and the empty string is returned. The `try_` forms
//! report the shortfall as [`ViewError::CapacityExceeded`] instead.
//! [`replace`] is best-effort: it stops at the first piece that does not
//! fit and returns what it has written so far.

use keel_codec::ByteWriter;
use keel_core::ViewError;

use crate::text::Str;

/// Write `a` then `b` into `dest`.
///
/// Returns the empty string, and writes nothing, if
/// `a.byte_length() + b.byte_length() > dest.len()`.
pub fn concat<'d>(dest: &'d mut [u8], a: Str<'_>, b: Str<'_>) -> Str<'d> {
    concat_all(dest, &[a, b])
}

/// Write `a`, `b` then `c` into `dest`, all-or-nothing like [`concat`].
pub fn concat3<'d>(dest: &'d mut [u8], a: Str<'_>, b: Str<'_>, c: Str<'_>) -> Str<'d> {
    concat_all(dest, &[a, b, c])
}

/// Write every part in order into `dest`, all-or-nothing like [`concat`].
pub fn concat_all<'d>(dest: &'d mut [u8], parts: &[Str<'_>]) -> Str<'d> {
    try_concat_all(dest, parts).unwrap_or_default()
}

/// Like [`concat`], but a short `dest` is an error.
pub fn try_concat<'d>(dest: &'d mut [u8], a: Str<'_>, b: Str<'_>) -> Result<Str<'d>, ViewError> {
    try_concat_all(dest, &[a, b])
}

/// Like [`concat_all`], but a short `dest` is an error.
///
/// `dest` is untouched on error. `requested` saturates at `usize::MAX`.
pub fn try_concat_all<'d>(dest: &'d mut [u8], parts: &[Str<'_>]) -> Result<Str<'d>, ViewError> {
    let requested = parts
        .iter()
        .fold(0usize, |acc, p| acc.saturating_add(p.byte_length()));
    let capacity = dest.len();
    let exceeded = ViewError::CapacityExceeded {
        requested,
        capacity,
    };
    if requested > capacity {
        return Err(exceeded);
    }
    let mut w = ByteWriter::new(dest);
    for part in parts {
        w.put_bytes(part.as_bytes()).map_err(|_| exceeded)?;
    }
    Ok(Str::from_bytes(w.into_written()))
}

/// Copy `original` into `dest`, replacing every non-overlapping
/// occurrence of `old` with `new`, scanning left to right.
///
/// Each step writes either the whole of `new` (on a match) or one byte of
/// `original`. The scan stops at the first step that does not fit, so a
/// replacement is never torn. An empty `old` copies `original` unchanged,
/// truncated to `dest.len()`.
pub fn replace<'d>(
    dest: &'d mut [u8],
    original: Str<'_>,
    old: Str<'_>,
    new: Str<'_>,
) -> Str<'d> {
    let src = original.as_bytes();
    let old = old.as_bytes();

    if old.is_empty() {
        let n = src.len().min(dest.len());
        dest[..n].copy_from_slice(&src[..n]);
        return Str::from_bytes(&dest[..n]);
    }

    let mut w = ByteWriter::new(dest);
    let mut i = 0;
    while i < src.len() {
        let (piece, advance) = if src[i..].starts_with(old) {
            (new.as_bytes(), old.len())
        } else {
            (&src[i..i + 1], 1)
        };
        if w.put_bytes(piece).is_err() {
            break;
        }
        i += advance;
    }
    Str::from_bytes(w.into_written())
}
