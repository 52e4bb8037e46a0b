//! Region error types.

use std::error::Error;
use std::fmt;

/// Errors from allocating in or resolving against a [`Region`](crate::Region).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The current generation's bank has too little room left.
    CapacityExceeded {
        /// Bytes requested.
        requested: usize,
        /// Bytes left in the current generation.
        remaining: usize,
    },
    /// A handle from a generation whose bank has been reused.
    StaleHandle {
        /// The generation recorded in the handle.
        handle_generation: u32,
        /// The oldest generation that still resolves.
        oldest_live: u32,
    },
    /// A handle from a generation this region has not reached.
    ForeignHandle {
        /// The generation recorded in the handle.
        handle_generation: u32,
        /// The region's current generation.
        current: u32,
    },
    /// The generation counter reached `u32::MAX`; the region cannot be
    /// reset again.
    GenerationOverflow,
    /// A handle whose bytes lie outside what its generation allocated.
    OutOfRange {
        /// Byte offset recorded in the handle.
        offset: usize,
        /// Length recorded in the handle.
        len: usize,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "region capacity exceeded: requested {requested} bytes, {remaining} remaining"
                )
            }
            Self::StaleHandle {
                handle_generation,
                oldest_live,
            } => {
                write!(
                    f,
                    "stale handle: generation {handle_generation}, oldest live {oldest_live}"
                )
            }
            Self::ForeignHandle {
                handle_generation,
                current,
            } => {
                write!(
                    f,
                    "handle generation {handle_generation} is ahead of region generation {current}"
                )
            }
            Self::GenerationOverflow => {
                write!(f, "generation counter overflow (u32::MAX resets reached)")
            }
            Self::OutOfRange { offset, len } => {
                write!(f, "handle range {offset}+{len} was never allocated")
            }
        }
    }
}

impl Error for RegionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_display_names_generations() {
        let e = RegionError::StaleHandle {
            handle_generation: 2,
            oldest_live: 4,
        };
        assert_eq!(e.to_string(), "stale handle: generation 2, oldest live 4");
    }
}
