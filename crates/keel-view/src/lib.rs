//! Fat-pointer views and the UTF-8 text view for the Keel substrate.
//!
//! A view is an `(address, length)` pair over memory the caller owns.
//! Here that pair is a borrowed Rust slice, so the borrow checker
//! enforces what a bare fat pointer cannot: a view never outlives its
//! backing storage, and two mutable views never overlap.
//!
//! # View types
//!
//! ```text
//! Array<'a, T>         root view over a whole caller block (mutable)
//! └── slice → Span<'a, T>          mutable window, write-through
//!             └── into_read_only → ReadOnlySpan<'a, T>   Copy, read-only
//! Str<'a>              ReadOnlySpan<'a, u8> with UTF-8 semantics
//! ```
//!
//! # Failure policies
//!
//! - **Fatal:** `at`, `set`, `swap`, `byte_at`, and raw construction with
//!   a negative length or a null pointer. These go through
//!   [`keel_core::fatal`].
//! - **Clamped:** `slice`, `substring`, `concat`, `replace`. Out-of-range
//!   or over-capacity requests produce an empty or truncated view.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod compose;
mod raw;
pub mod read_only;
pub mod span;
pub mod text;

pub use array::Array;
pub use compose::{concat, concat3, concat_all, replace, try_concat, try_concat_all};
pub use read_only::ReadOnlySpan;
pub use span::Span;
pub use text::Str;
