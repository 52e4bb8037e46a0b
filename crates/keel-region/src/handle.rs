//! Region handles.
//!
//! A [`Handle`] names bytes inside a region without borrowing it. The
//! `generation` field makes staleness an O(1) comparison.

use std::fmt;

/// Location of an allocation within a [`Region`](crate::Region).
///
/// Carries no lifetime, so it can be stored anywhere. Resolving it
/// against the region that issued it checks the generation first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Handle {
    pub(crate) generation: u32,
    /// Byte offset from the start of the caller buffer.
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Handle {
    pub(crate) fn new(generation: u32, offset: usize, len: usize) -> Self {
        Self {
            generation,
            offset,
            len,
        }
    }

    /// The generation this handle belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Byte offset from the start of the region's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Handle(gen={}, off={}, len={})",
            self.generation, self.offset, self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let h = Handle::new(3, 64, 16);
        assert_eq!(h.generation(), 3);
        assert_eq!(h.offset(), 64);
        assert_eq!(h.len(), 16);
        assert!(!h.is_empty());
        assert!(Handle::new(0, 0, 0).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Handle::new(1, 2, 3).to_string(), "Handle(gen=1, off=2, len=3)");
    }
}
