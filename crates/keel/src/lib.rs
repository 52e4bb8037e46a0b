//! Keel: allocation-free views, UTF-8 text, and binary codecs over
//! caller-owned memory.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Keel sub-crates. For most users, adding `keel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // Parse "key = value" out of a caller buffer without allocating.
//! let line = Str::new("  name = keel \n");
//! let (key, value) = line.trim().split_once(b'=').unwrap();
//! assert_eq!(key.trim(), "name");
//! assert_eq!(value.trim(), "keel");
//!
//! // Build new text into a fixed destination.
//! let mut dest = [0u8; 16];
//! let joined = concat3(&mut dest, key.trim(), Str::new(":"), value.trim());
//! assert_eq!(joined, "name:keel");
//!
//! // Fixed-width little-endian fields.
//! let mut record = [0u8; 6];
//! keel::codec::binary::write_le(0xBEEFu16, &mut record, 0);
//! keel::codec::binary::write_le(7u32, &mut record, 2);
//! assert_eq!(keel::codec::binary::read_le::<u32>(&record, 2), 7);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keel-core` | `Element`, capability traits, `ViewError`, `fatal` |
//! | [`codec`] | `keel-codec` | Little-endian binary codec, byte cursors, UTF-8 codec |
//! | [`view`] | `keel-view` | `Array`, `Span`, `ReadOnlySpan`, `Str`, concat/replace |
//! | [`region`] | `keel-region` | Generation-tagged handles into a caller buffer |
//!
//! The C ABI lives in the separate `keel-ffi` crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and capability traits (`keel-core`).
///
/// Contains the [`types::Element`] bound, the [`types::Indexable`],
/// [`types::Iterable`] and [`types::Sliceable`] traits, and the fatal
/// access path [`types::fatal`].
pub use keel_core as types;

/// Binary and UTF-8 codecs (`keel-codec`).
///
/// [`codec::binary`] reads and writes fixed-width little-endian values,
/// [`codec::utf8`] encodes and decodes codepoints with U+FFFD
/// substitution.
pub use keel_codec as codec;

/// Fat-pointer views and the text view (`keel-view`).
pub use keel_view as view;

/// Generation-tagged handles (`keel-region`).
///
/// [`region::Region`] hands out [`region::Handle`]s that fail to resolve
/// once their generation has been recycled.
pub use keel_region as region;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    // Traits
    pub use keel_core::{Control, Element, Indexable, Iterable, Sliceable, Traversal};

    // Errors
    pub use keel_codec::{CodecError, Utf8Error};
    pub use keel_core::ViewError;
    pub use keel_region::RegionError;

    // Codecs
    pub use keel_codec::{ByteReader, ByteWriter, FixedWidth, REPLACEMENT_CHARACTER};

    // Views
    pub use keel_view::{concat, concat3, concat_all, replace, try_concat, try_concat_all};
    pub use keel_view::{Array, ReadOnlySpan, Span, Str};

    // Regions
    pub use keel_region::{Handle, Region, RegionConfig};
}
