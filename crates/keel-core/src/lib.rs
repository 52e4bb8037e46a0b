//! Core types and traits for the Keel memory/text substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions every view type in the workspace is built on:
//! the [`Element`] bound for trivially-copyable element types, one
//! capability trait per operation family ([`Indexable`], [`Iterable`],
//! [`Sliceable`]), the [`Control`] signal for short-circuiting
//! traversal, and the error types used by the fatal access path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod traits;

pub use element::Element;
pub use error::{fatal, ViewError};
pub use traits::{Control, Indexable, Iterable, Sliceable, Traversal};
