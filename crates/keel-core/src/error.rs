//! Error types for view access.
//!
//! Keel has two failure policies. Indexed access (`at`, `set`) and raw
//! construction treat a bad argument as a programmer error and go down
//! the fatal path via [`fatal`]. Slicing, substring, and copy-into-buffer
//! operations clamp instead and never produce an error. The checked
//! companions (`get`, `try_set`) return a [`ViewError`] so surrounding
//! code can validate before calling into the fatal API.

use std::error::Error;
use std::fmt;

/// Errors describing an invalid view access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Indexed access outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the view.
        len: usize,
    },
    /// A raw view was constructed with a negative length.
    NegativeLength {
        /// The rejected length.
        len: isize,
    },
    /// A raw view of non-zero length was constructed from a null pointer.
    NullPointer {
        /// The requested length.
        len: usize,
    },
    /// A write needed more room than the destination has.
    CapacityExceeded {
        /// Number of elements the operation needed.
        requested: usize,
        /// Number of elements the destination holds.
        capacity: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, length {len}")
            }
            Self::NegativeLength { len } => {
                write!(f, "negative view length: {len}")
            }
            Self::NullPointer { len } => {
                write!(f, "null pointer for view of length {len}")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, capacity {capacity}"
                )
            }
        }
    }
}

impl Error for ViewError {}

/// Abort the current operation with a diagnostic.
///
/// This is the single exit for every fatal-policy violation in the
/// workspace. The message is the error's `Display` text, so tests can
/// match on it with `#[should_panic(expected = ...)]`. Under
/// `panic = "abort"` the process terminates here.
#[cold]
#[track_caller]
pub fn fatal<E: fmt::Display>(err: E) -> ! {
    panic!("keel: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_names_index_and_length() {
        let e = ViewError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index out of bounds: index 5, length 3");
    }

    #[test]
    fn negative_length_display() {
        let e = ViewError::NegativeLength { len: -2 };
        assert_eq!(e.to_string(), "negative view length: -2");
    }

    #[test]
    fn capacity_display() {
        let e = ViewError::CapacityExceeded {
            requested: 10,
            capacity: 4,
        };
        assert!(e.to_string().contains("requested 10"));
    }

    #[test]
    #[should_panic(expected = "keel: index out of bounds: index 7, length 2")]
    fn fatal_panics_with_display_text() {
        fatal(ViewError::IndexOutOfBounds { index: 7, len: 2 });
    }
}
