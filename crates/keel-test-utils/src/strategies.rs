//! `proptest` strategies shared across the workspace.

use proptest::prelude::*;

/// Largest Unicode scalar value.
const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Any Unicode scalar value (surrogates excluded).
pub fn scalar_value() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..0xD800, 0xE000u32..=MAX_CODEPOINT]
}

/// Arbitrary bytes, including malformed UTF-8.
pub fn raw_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Valid UTF-8 text of up to `max_chars` characters.
pub fn utf8_text(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_chars).prop_map(|cs| cs.into_iter().collect())
}

/// Text with ASCII whitespace runs on both ends.
pub fn padded_text() -> impl Strategy<Value = String> {
    ("[ \t\r\n]{0,4}", "[a-z \t]{0,12}", "[ \t\r\n]{0,4}")
        .prop_map(|(lead, body, tail)| format!("{lead}{body}{tail}"))
}

/// A `(start, len)` request against a view of `len` elements, biased
/// so roughly half of the requests run past the end.
pub fn slice_request(view_len: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..=view_len * 2 + 1, 0..=view_len * 2 + 1)
}
