//! Generation-tagged handles into caller-supplied memory.
//!
//! Borrowed views cover most of Keel, but some callers must hold on to a
//! reference where a lifetime cannot follow: across an FFI call, or in a
//! table that outlives the borrow. A [`Region`] bump-allocates out of a
//! caller buffer and hands out lifetime-free [`Handle`]s instead. Each
//! handle carries the generation it was allocated in, so using it after
//! the memory has been recycled is a [`RegionError::StaleHandle`], not a
//! read of someone else's bytes.
//!
//! ```text
//! caller buffer
//! ├── bank 0  ← generation 0, 2, 4, ...
//! └── bank 1  ← generation 1, 3, 5, ...   (max_generation_age = 1)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod region;

pub use config::RegionConfig;
pub use error::RegionError;
pub use handle::Handle;
pub use region::Region;
