//! Reusable byte and text fixtures.
//!
//! - [`MIXED_SCRIPT`]: valid UTF-8 covering 1-, 2-, 3- and 4-byte sequences.
//! - [`MALFORMED_UTF8`]: one representative of each malformed class.
//! - [`ByteCorpus`]: a caller-owned scratch buffer plus a source text,
//!   the usual setup for destination-buffer operations.

/// Valid UTF-8 with every sequence length: ASCII, Latin-1, CJK, emoji.
pub const MIXED_SCRIPT: &str = "Ax \u{e9}t\u{e9} \u{4e16}\u{754c} \u{1f389}!";

/// Malformed UTF-8 samples, each paired with a label for test output.
pub const MALFORMED_UTF8: &[(&str, &[u8])] = &[
    ("stray continuation", &[0x80]),
    ("overlong two-byte", &[0xC0, 0xAF]),
    ("overlong three-byte", &[0xE0, 0x80, 0xAF]),
    ("encoded surrogate", &[0xED, 0xA0, 0x80]),
    ("above U+10FFFF", &[0xF4, 0x90, 0x80, 0x80]),
    ("invalid lead 0xFF", &[0xFF]),
    ("truncated three-byte", &[0xE2, 0x82]),
    ("bad continuation", &[0xE2, b'(', 0xA1]),
];

/// A source text plus a fixed-capacity destination buffer.
///
/// Keel never allocates, so every concat/replace test needs caller
/// storage; this bundles the two with a known capacity.
pub struct ByteCorpus {
    pub text: Vec<u8>,
    pub scratch: Vec<u8>,
}

impl ByteCorpus {
    /// `text` plus a zeroed scratch buffer of `capacity` bytes.
    pub fn new(text: impl AsRef<[u8]>, capacity: usize) -> Self {
        Self {
            text: text.as_ref().to_vec(),
            scratch: vec![0; capacity],
        }
    }

    /// Split borrow: read-only text and mutable scratch at once.
    pub fn parts(&mut self) -> (&[u8], &mut [u8]) {
        (&self.text, &mut self.scratch)
    }
}

/// Bytes of `s` followed by a NUL terminator, as a byte literal would be laid out.
pub fn nul_terminated(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() + 1);
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    out
}

/// A deterministic sequence `0, 1, 2, ...` of length `n`, wrapping at 256.
pub fn counting_bytes(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}
