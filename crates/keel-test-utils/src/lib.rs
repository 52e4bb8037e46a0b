//! Test fixtures and property-test strategies for Keel development.
//!
//! Everything here is expressed in plain bytes, codepoints, and strings
//! so the fixtures can be shared by every crate in the workspace
//! without dev-dependency cycles on Keel's own types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{ByteCorpus, MALFORMED_UTF8, MIXED_SCRIPT};
