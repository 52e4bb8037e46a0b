//! Benchmark inputs for the Keel substrate.
//!
//! Every generator is deterministic in its `seed` so runs compare
//! like with like:
//!
//! - [`pseudo_random_bytes`]: arbitrary bytes, malformed UTF-8 included
//! - [`mixed_text`]: well-formed UTF-8 cycling through 1- to 4-byte sequences
//! - [`delimited_text`]: `key=value` records separated by `;`
//! - [`record_layout`]: a packed little-endian record buffer

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_codec::binary;

/// Multiplier of the 64-bit LCG used by every generator here.
const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Codepoints cycled through by [`mixed_text`]: one per encoded width.
const MIXED_CODEPOINTS: [char; 4] = ['a', '\u{e9}', '\u{4e16}', '\u{1f389}'];

fn next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
    *state >> 33
}

/// `len` pseudo-random bytes.
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len).map(|_| next(&mut state) as u8).collect()
}

/// Well-formed UTF-8 of `chars` codepoints.
///
/// About a quarter of the codepoints are ASCII, so the result exercises
/// every branch of the decoder.
pub fn mixed_text(chars: usize, seed: u64) -> String {
    let mut state = seed;
    (0..chars)
        .map(|_| MIXED_CODEPOINTS[(next(&mut state) % 4) as usize])
        .collect()
}

/// `records` ASCII records of the form `kNNN=vNNN`, joined by `;`.
pub fn delimited_text(records: usize, seed: u64) -> String {
    let mut state = seed;
    let mut out = String::with_capacity(records * 10);
    for i in 0..records {
        if i > 0 {
            out.push(';');
        }
        let k = next(&mut state) % 1000;
        let v = next(&mut state) % 1000;
        out.push_str(&format!("k{k:03}=v{v:03}"));
    }
    out
}

/// Size in bytes of one record written by [`record_layout`].
pub const RECORD_SIZE: usize = 2 + 4 + 8 + 4;

/// `count` packed records of `(u16, u32, u64, f32)`, little-endian.
pub fn record_layout(count: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    let mut buf = vec![0u8; count * RECORD_SIZE];
    for r in 0..count {
        let base = r * RECORD_SIZE;
        binary::write_le(next(&mut state) as u16, &mut buf, base);
        binary::write_le(next(&mut state) as u32, &mut buf, base + 2);
        binary::write_le(next(&mut state) << 20, &mut buf, base + 6);
        binary::write_le(r as f32 * 0.5, &mut buf, base + 14);
    }
    buf
}
