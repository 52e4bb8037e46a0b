//! Fixed-width binary and UTF-8 codecs for the Keel substrate.
//!
//! Both codecs are leaves: they operate on plain byte slices and an
//! offset, with no knowledge of the view types built on top of them.
//!
//! - [`binary`]: little-endian integer encode/decode and IEEE-754 bit
//!   reinterpretation. Out-of-range reads and writes are fatal, like
//!   indexed view access; `try_` companions return [`CodecError`].
//! - [`cursor`]: sequential readers and writers over a byte buffer for
//!   parsing code that probes for "enough bytes left".
//! - [`utf8`]: codepoint encode/decode. Malformed input decodes to
//!   U+FFFD and always advances by at least one byte.
//!
//! Byte order is not configurable. Big-endian consumers byte-swap
//! before encoding and after decoding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary;
pub mod cursor;
pub mod error;
pub mod utf8;

pub use binary::FixedWidth;
pub use cursor::{ByteReader, ByteWriter};
pub use error::{CodecError, Utf8Error};
pub use utf8::{decode_codepoint, encode_codepoint, REPLACEMENT_CHARACTER};
