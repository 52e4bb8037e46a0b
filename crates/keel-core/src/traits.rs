//! Capability traits shared by every view type.
//!
//! One trait per capability, resolved at compile time:
//!
//! - [`Indexable`]: length and element access by index.
//! - [`Iterable`]: linear traversal from index 0 with short-circuiting.
//! - [`Sliceable`]: narrowing a view to a sub-range without copying.
//!
//! Traversal early-exit is driven by the [`Control`] value the visitor
//! returns, so no caller closure ever needs a shared mutable flag.

use std::ops::Range;

use crate::element::Element;
use crate::error::{fatal, ViewError};

/// Signal returned by a traversal visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Keep walking.
    Continue,
    /// Stop; the current element is the one being searched for.
    Found,
    /// Stop; the search failed at the current element.
    Abort,
}

/// Outcome of [`Iterable::traverse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Every element was visited and the visitor always continued.
    Exhausted,
    /// The visitor returned [`Control::Found`] at this index.
    Found(usize),
    /// The visitor returned [`Control::Abort`] at this index.
    Aborted(usize),
}

impl Traversal {
    /// Index of the found element, if any.
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            _ => None,
        }
    }
}

/// Length and indexed element access.
pub trait Indexable<T: Element> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Read the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<T>;

    /// Whether the view has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `index >= len()`.
    #[track_caller]
    fn at(&self, index: usize) -> T {
        match self.get(index) {
            Some(v) => v,
            None => fatal(ViewError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }
}

/// Linear traversal over elements, index 0 upward.
///
/// Implementors provide [`elements`](Iterable::elements); every
/// combinator is derived from it.
pub trait Iterable<T: Element> {
    /// Iterator over element values.
    type Elements<'s>: Iterator<Item = T>
    where
        Self: 's;

    /// Iterate element values in index order.
    fn elements(&self) -> Self::Elements<'_>;

    /// Walk elements until the visitor stops.
    fn traverse<F>(&self, mut visit: F) -> Traversal
    where
        F: FnMut(usize, T) -> Control,
    {
        for (i, v) in self.elements().enumerate() {
            match visit(i, v) {
                Control::Continue => {}
                Control::Found => return Traversal::Found(i),
                Control::Abort => return Traversal::Aborted(i),
            }
        }
        Traversal::Exhausted
    }

    /// Call `f` on every element.
    fn iterate<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        self.elements().for_each(f);
    }

    /// Left fold from index 0.
    fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.elements().fold(init, f)
    }

    /// Whether any element satisfies `pred`. Stops at the first hit.
    fn exists<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        self.traverse(|_, v| if pred(v) { Control::Found } else { Control::Continue })
            .found()
            .is_some()
    }

    /// Whether every element satisfies `pred`. Stops at the first miss.
    fn forall<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        !matches!(
            self.traverse(|_, v| if pred(v) { Control::Continue } else { Control::Abort }),
            Traversal::Aborted(_)
        )
    }

    /// First element satisfying `pred`, with its index.
    fn find<F>(&self, mut pred: F) -> Option<(usize, T)>
    where
        F: FnMut(T) -> bool,
    {
        let mut hit = None;
        self.traverse(|i, v| {
            if pred(v) {
                hit = Some((i, v));
                Control::Found
            } else {
                Control::Continue
            }
        });
        hit
    }

    /// Number of elements satisfying `pred`.
    fn count_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(T) -> bool,
    {
        self.elements().filter(|&v| pred(v)).count()
    }
}

/// Narrowing a view to a sub-range.
///
/// Views are fat pointers and are passed by value. Slicing is permissive:
/// an out-of-range request yields the empty view rather than failing.
pub trait Sliceable: Sized {
    /// Number of elements in the view.
    fn extent(&self) -> usize;

    /// View of `[start, start + len)`, or the empty view if that range
    /// does not fit.
    fn slice(self, start: usize, len: usize) -> Self;

    /// View of `[start, extent)`, or the empty view if `start > extent`.
    fn slice_from(self, start: usize) -> Self {
        let len = self.extent().saturating_sub(start);
        self.slice(start, len)
    }

    /// Like [`slice`](Sliceable::slice), but a `len` that runs past the
    /// end is shortened to what remains. A `start` past the end still
    /// yields the empty view.
    fn slice_clamped(self, start: usize, len: usize) -> Self {
        let len = len.min(self.extent().saturating_sub(start));
        self.slice(start, len)
    }
}

/// Resolve a `(start, len)` request against a view of `total` elements.
///
/// Returns `None` when the range does not fit, including when
/// `start + len` overflows.
#[inline]
pub fn slice_range(start: usize, len: usize, total: usize) -> Option<Range<usize>> {
    let end = start.checked_add(len)?;
    if end > total {
        return None;
    }
    Some(start..end)
}

/// Validate an element index, producing the error the fatal path reports.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<usize, ViewError> {
    if index < len {
        Ok(index)
    } else {
        Err(ViewError::IndexOutOfBounds { index, len })
    }
}
