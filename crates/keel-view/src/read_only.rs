//! Read-only fat-pointer view.

use std::fmt;

use keel_core::traits::{check_index, slice_range};
use keel_core::{fatal, Element, Indexable, Iterable, Sliceable, ViewError};

use crate::raw;
use crate::span::Span;

/// A read-only window over `len` elements of caller memory.
///
/// `ReadOnlySpan` is `Copy`: passing it around copies the fat pointer,
/// never the elements. Slicing aliases the same memory.
#[derive(Clone, Copy)]
pub struct ReadOnlySpan<'a, T> {
    data: &'a [T],
}

impl<'a, T: Element> ReadOnlySpan<'a, T> {
    /// Wrap an existing slice.
    #[inline]
    pub const fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// The empty view.
    #[inline]
    pub const fn empty() -> Self {
        Self { data: &[] }
    }

    /// Wrap `len` elements starting at `ptr`.
    ///
    /// A zero length yields the empty view whatever `ptr` is.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `len` is negative, or if `ptr` is null
    /// and `len` is positive.
    ///
    /// # Safety
    ///
    /// For a positive `len`, `ptr` must be aligned and valid for `len`
    /// reads of `T` for all of `'a`, with no mutation through other
    /// pointers during `'a`.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const T, len: isize) -> Self {
        // SAFETY: forwarded to the caller.
        Self {
            data: unsafe { raw::slice_from_raw(ptr, len) },
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `index >= len()`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        match check_index(index, self.len()) {
            Ok(i) => self.data[i],
            Err(e) => fatal(e),
        }
    }

    /// Element at `index`, or the error the fatal path would report.
    #[inline]
    pub fn try_at(&self, index: usize) -> Result<T, ViewError> {
        check_index(index, self.len()).map(|i| self.data[i])
    }

    /// View of `[start, start + len)`, or the empty view if it does not fit.
    #[inline]
    pub fn slice(self, start: usize, len: usize) -> Self {
        match slice_range(start, len, self.len()) {
            Some(r) => Self::new(&self.data[r]),
            None => Self::empty(),
        }
    }

    /// The underlying slice, valid for the full view lifetime.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Address of the first element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterate elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Copy `min(len, dest.len())` elements into `dest` from index 0.
    ///
    /// Returns the number copied. Never writes past the end of `dest`.
    pub fn copy_to(&self, mut dest: Span<'_, T>) -> usize {
        let n = self.len().min(dest.len());
        dest.as_mut_slice()[..n].copy_from_slice(&self.data[..n]);
        n
    }
}

impl<T: Element> Default for ReadOnlySpan<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Element> From<&'a [T]> for ReadOnlySpan<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element, const N: usize> From<&'a [T; N]> for ReadOnlySpan<'a, T> {
    fn from(data: &'a [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Element + PartialEq> PartialEq for ReadOnlySpan<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Element + Eq> Eq for ReadOnlySpan<'_, T> {}

impl<T: Element + fmt::Debug> fmt::Debug for ReadOnlySpan<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data).finish()
    }
}

impl<'a, T: Element> IntoIterator for ReadOnlySpan<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Element> Indexable<T> for ReadOnlySpan<'_, T> {
    fn len(&self) -> usize {
        ReadOnlySpan::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        ReadOnlySpan::get(self, index)
    }
}

impl<'a, T: Element> Iterable<T> for ReadOnlySpan<'a, T> {
    type Elements<'s>
        = std::iter::Copied<std::slice::Iter<'s, T>>
    where
        Self: 's;

    fn elements(&self) -> Self::Elements<'_> {
        self.data.iter().copied()
    }
}

impl<T: Element> Sliceable for ReadOnlySpan<'_, T> {
    fn extent(&self) -> usize {
        self.len()
    }

    fn slice(self, start: usize, len: usize) -> Self {
        ReadOnlySpan::slice(self, start, len)
    }
}
