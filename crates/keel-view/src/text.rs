//! UTF-8 text view.
//!
//! [`Str`] is a read-only byte view that carries UTF-8 meaning. It never
//! owns or allocates; every operation that produces text either returns
//! a narrower view of the same bytes or writes into a caller buffer (see
//! [`compose`](crate::compose)).
//!
//! Content is presumed, not required, to be UTF-8. Byte-level operations
//! (search, trim, comparison) are exact on any input. Codepoint-level
//! operations substitute U+FFFD for malformed bytes.

use std::cmp::Ordering;
use std::fmt::{self, Write as _};

use keel_codec::utf8::{self, Decoder};
use keel_codec::Utf8Error;
use keel_core::traits::{check_index, slice_range};
use keel_core::{fatal, Indexable, Iterable, Sliceable};

use crate::raw;
use crate::read_only::ReadOnlySpan;

/// A view over UTF-8 bytes in caller memory.
///
/// Ordering and equality are byte-wise; a proper prefix sorts first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Str<'a> {
    bytes: &'a [u8],
}

fn is_trim_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

impl<'a> Str<'a> {
    /// View over a Rust string.
    #[inline]
    pub const fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
        }
    }

    /// View over arbitrary bytes.
    #[inline]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// View over a NUL-terminated byte literal, excluding the terminator.
    ///
    /// A literal without a trailing NUL is taken whole.
    #[inline]
    pub fn from_literal(bytes: &'a [u8]) -> Self {
        match bytes {
            [rest @ .., 0] => Self { bytes: rest },
            _ => Self { bytes },
        }
    }

    /// The empty string.
    #[inline]
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// Wrap `len` bytes starting at `ptr`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `len` is negative, or if `ptr` is null
    /// and `len` is positive.
    ///
    /// # Safety
    ///
    /// Same contract as [`ReadOnlySpan::from_raw_parts`].
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const u8, len: isize) -> Self {
        // SAFETY: forwarded to the caller.
        Self {
            bytes: unsafe { raw::slice_from_raw(ptr, len) },
        }
    }

    /// The viewed bytes, valid for the full view lifetime.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The same bytes as a plain byte view.
    #[inline]
    pub const fn as_span(&self) -> ReadOnlySpan<'a, u8> {
        ReadOnlySpan::new(self.bytes)
    }

    /// Length in bytes.
    #[inline]
    pub const fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the string has no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `index >= byte_length()`.
    #[inline]
    #[track_caller]
    pub fn byte_at(&self, index: usize) -> u8 {
        match check_index(index, self.byte_length()) {
            Ok(i) => self.bytes[i],
            Err(e) => fatal(e),
        }
    }

    /// Number of codepoints. Each malformed byte counts as one U+FFFD,
    /// so this always equals `self.codepoints().count()`.
    #[inline]
    pub fn codepoint_count(&self) -> usize {
        utf8::count_codepoints(self.bytes)
    }

    /// Number of codepoints by lead-byte classification only.
    ///
    /// Agrees with [`codepoint_count`](Str::codepoint_count) on valid
    /// UTF-8 and is cheaper, but miscounts malformed input.
    #[inline]
    pub fn codepoint_count_lenient(&self) -> usize {
        utf8::count_codepoints_lenient(self.bytes)
    }

    /// Whether every byte is below 0x80.
    #[inline]
    pub fn is_ascii(&self) -> bool {
        utf8::is_ascii(self.bytes)
    }

    /// `(codepoint, width)` pairs in order, substituting U+FFFD.
    #[inline]
    pub fn codepoints(&self) -> Decoder<'a> {
        Decoder::new(self.bytes)
    }

    /// Byte-wise equality.
    #[inline]
    pub fn equals(&self, other: Str<'_>) -> bool {
        self.bytes == other.bytes
    }

    /// Byte-wise lexicographic comparison; a proper prefix is less.
    #[inline]
    pub fn compare(&self, other: Str<'_>) -> Ordering {
        self.bytes.cmp(other.bytes)
    }

    /// Whether the string begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(prefix.as_ref())
    }

    /// Whether the string ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.bytes.ends_with(suffix.as_ref())
    }

    /// Whether `needle` occurs anywhere. The empty needle always does.
    #[inline]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.index_of(needle).is_some()
    }

    /// Byte offset of the first occurrence of `needle`.
    ///
    /// The empty needle matches at 0.
    pub fn index_of(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(0);
        }
        self.bytes.windows(needle.len()).position(|w| w == needle)
    }

    /// Byte offset of the last occurrence of `needle`.
    ///
    /// The empty needle matches at `byte_length()`.
    pub fn last_index_of(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(self.byte_length());
        }
        self.bytes.windows(needle.len()).rposition(|w| w == needle)
    }

    /// View of `len` bytes from `start`.
    ///
    /// A `start` at or past the end gives the empty string; `len` is
    /// shortened to what remains.
    #[inline]
    pub fn substring(self, start: usize, len: usize) -> Self {
        if start >= self.byte_length() {
            return Self::empty();
        }
        let len = len.min(self.byte_length() - start);
        Self::from_bytes(&self.bytes[start..start + len])
    }

    /// View from `start` to the end.
    #[inline]
    pub fn substring_from(self, start: usize) -> Self {
        self.substring(start, usize::MAX)
    }

    /// Drop leading ASCII whitespace (space, tab, CR, LF).
    pub fn trim_start(self) -> Self {
        let skip = self
            .bytes
            .iter()
            .position(|&b| !is_trim_byte(b))
            .unwrap_or(self.bytes.len());
        Self::from_bytes(&self.bytes[skip..])
    }

    /// Drop trailing ASCII whitespace (space, tab, CR, LF).
    pub fn trim_end(self) -> Self {
        let keep = self
            .bytes
            .iter()
            .rposition(|&b| !is_trim_byte(b))
            .map_or(0, |i| i + 1);
        Self::from_bytes(&self.bytes[..keep])
    }

    /// Drop ASCII whitespace from both ends.
    #[inline]
    pub fn trim(self) -> Self {
        self.trim_start().trim_end()
    }

    /// Split around the first `delimiter` byte, excluding it.
    pub fn split_once(self, delimiter: u8) -> Option<(Self, Self)> {
        let at = self.bytes.iter().position(|&b| b == delimiter)?;
        Some((
            Self::from_bytes(&self.bytes[..at]),
            Self::from_bytes(&self.bytes[at + 1..]),
        ))
    }

    /// The bytes as `&str`, if they are well-formed UTF-8.
    ///
    /// Errors are classified by [`utf8::validate`].
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        utf8::validate(self.bytes)?;
        std::str::from_utf8(self.bytes).map_err(|e| Utf8Error::InvalidSequence {
            offset: e.valid_up_to(),
        })
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a [u8]> for Str<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<Str<'a>> for ReadOnlySpan<'a, u8> {
    fn from(s: Str<'a>) -> Self {
        s.as_span()
    }
}

impl AsRef<[u8]> for Str<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cp, _) in self.codepoints() {
            f.write_char(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for (cp, _) in self.codepoints() {
            let c = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
            for e in c.escape_debug() {
                f.write_char(e)?;
            }
        }
        f.write_char('"')
    }
}

impl Indexable<u8> for Str<'_> {
    fn len(&self) -> usize {
        self.byte_length()
    }

    fn get(&self, index: usize) -> Option<u8> {
        Str::get(self, index)
    }
}

impl<'a> Iterable<u8> for Str<'a> {
    type Elements<'s>
        = std::iter::Copied<std::slice::Iter<'s, u8>>
    where
        Self: 's;

    fn elements(&self) -> Self::Elements<'_> {
        self.bytes.iter().copied()
    }
}

impl Sliceable for Str<'_> {
    fn extent(&self) -> usize {
        self.byte_length()
    }

    fn slice(self, start: usize, len: usize) -> Self {
        match slice_range(start, len, self.byte_length()) {
            Some(r) => Self::from_bytes(&self.bytes[r]),
            None => Self::empty(),
        }
    }
}
