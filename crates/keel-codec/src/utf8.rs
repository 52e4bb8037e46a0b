//! UTF-8 codepoint encode/decode.
//!
//! Decoding never fails: any malformed, overlong, surrogate, or
//! truncated sequence decodes to [`REPLACEMENT_CHARACTER`] and consumes
//! exactly one byte, so a loop `while offset < len` always terminates.
//! [`validate`] reports the same conditions as a [`Utf8Error`] for
//! callers that want to reject bad input instead.

use smallvec::SmallVec;

use crate::error::Utf8Error;

/// U+FFFD, substituted for every malformed sequence.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Longest UTF-8 sequence in bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// An encoded codepoint held inline (never spills: at most 4 bytes).
pub type EncodedCodepoint = SmallVec<[u8; MAX_SEQUENCE_LEN]>;

/// Whether `cp` is a Unicode scalar value (in range, not a surrogate).
#[inline]
pub fn is_scalar_value(cp: u32) -> bool {
    cp <= MAX_CODEPOINT && !(0xD800..=0xDFFF).contains(&cp)
}

/// Sequence length announced by a lead byte.
///
/// Classifies by high-bit pattern only: `< 0x80` is 1, `< 0xE0` is 2,
/// `< 0xF0` is 3, anything else is 4. Continuation bytes are not
/// rejected here.
#[inline]
pub fn sequence_length(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead < 0xE0 {
        2
    } else if lead < 0xF0 {
        3
    } else {
        4
    }
}

/// Number of bytes [`encode_codepoint`] writes for `cp`.
#[inline]
pub fn encoded_len(cp: u32) -> usize {
    let cp = if is_scalar_value(cp) {
        cp
    } else {
        REPLACEMENT_CHARACTER
    };
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Write the UTF-8 encoding of `cp` at `buffer[offset..]`.
///
/// Returns the number of bytes written (1 to 4). Surrogates and values
/// above U+10FFFF are written as U+FFFD. The caller guarantees room for
/// the encoding; if it is short, slice indexing panics rather than
/// writing out of bounds.
#[inline]
pub fn encode_codepoint(cp: u32, buffer: &mut [u8], offset: usize) -> usize {
    let cp = if is_scalar_value(cp) {
        cp
    } else {
        REPLACEMENT_CHARACTER
    };
    if cp < 0x80 {
        buffer[offset] = cp as u8;
        1
    } else if cp < 0x800 {
        let out = &mut buffer[offset..offset + 2];
        out[0] = 0xC0 | (cp >> 6) as u8;
        out[1] = 0x80 | (cp & 0x3F) as u8;
        2
    } else if cp < 0x10000 {
        let out = &mut buffer[offset..offset + 3];
        out[0] = 0xE0 | (cp >> 12) as u8;
        out[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (cp & 0x3F) as u8;
        3
    } else {
        let out = &mut buffer[offset..offset + 4];
        out[0] = 0xF0 | (cp >> 18) as u8;
        out[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
        out[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        out[3] = 0x80 | (cp & 0x3F) as u8;
        4
    }
}

/// Encode `cp` into an inline buffer.
pub fn encode_to_small(cp: u32) -> EncodedCodepoint {
    let mut buf = [0u8; MAX_SEQUENCE_LEN];
    let n = encode_codepoint(cp, &mut buf, 0);
    SmallVec::from_slice(&buf[..n])
}

/// Decode one sequence, reporting why it is malformed.
fn decode_checked(
    buffer: &[u8],
    offset: usize,
    max_len: usize,
) -> Result<(u32, usize), Utf8Error> {
    let avail = buffer.len().saturating_sub(offset).min(max_len);
    if avail == 0 {
        return Err(Utf8Error::Truncated { offset });
    }
    let lead = buffer[offset];
    // (sequence length, payload bits of the lead byte, smallest legal value)
    let (need, init, min) = match lead {
        0x00..=0x7F => return Ok((lead as u32, 1)),
        0xC2..=0xDF => (2, (lead & 0x1F) as u32, 0x80),
        0xE0..=0xEF => (3, (lead & 0x0F) as u32, 0x800),
        0xF0..=0xF4 => (4, (lead & 0x07) as u32, 0x10000),
        _ => return Err(Utf8Error::InvalidSequence { offset }),
    };

    let mut cp = init;
    for i in 1..need {
        if i >= avail {
            return Err(Utf8Error::Truncated { offset });
        }
        let b = buffer[offset + i];
        if b & 0xC0 != 0x80 {
            return Err(Utf8Error::InvalidSequence { offset });
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
    }

    if cp < min || !is_scalar_value(cp) {
        return Err(Utf8Error::InvalidSequence { offset });
    }
    Ok((cp, need))
}

/// Decode the sequence starting at `buffer[offset]`, reading at most
/// `max_len` bytes.
///
/// Returns `(codepoint, bytes_consumed)`. Malformed or truncated input
/// yields `(0xFFFD, 1)`, so `bytes_consumed >= 1` always holds.
#[inline]
pub fn decode_codepoint(buffer: &[u8], offset: usize, max_len: usize) -> (u32, usize) {
    decode_checked(buffer, offset, max_len).unwrap_or((REPLACEMENT_CHARACTER, 1))
}

/// Whether every byte is below 0x80.
#[inline]
pub fn is_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b < 0x80)
}

/// Number of codepoints, counting each malformed byte as one U+FFFD.
pub fn count_codepoints(bytes: &[u8]) -> usize {
    if is_ascii(bytes) {
        return bytes.len();
    }
    Decoder::new(bytes).count()
}

/// Number of codepoints by lead-byte classification alone.
///
/// Continuation bytes are trusted, not checked. A final sequence that
/// runs past the end still counts once.
pub fn count_codepoints_lenient(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += sequence_length(bytes[i]);
        count += 1;
    }
    count
}

/// Check that `bytes` is well-formed UTF-8.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        let (_, n) = decode_checked(bytes, offset, MAX_SEQUENCE_LEN)?;
        offset += n;
    }
    Ok(())
}

/// Iterator of `(codepoint, width)` pairs over a byte slice.
///
/// Applies the [`decode_codepoint`] substitution policy.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Decode from the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Byte offset of the next sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Decoder<'_> {
    type Item = (u32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        let (cp, n) = decode_codepoint(self.bytes, self.offset, MAX_SEQUENCE_LEN);
        self.offset += n;
        Some((cp, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bytes.len() - self.offset;
        (left.div_ceil(MAX_SEQUENCE_LEN), Some(left))
    }
}
