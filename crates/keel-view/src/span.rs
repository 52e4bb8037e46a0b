//! Mutable fat-pointer view.

use std::fmt;

use keel_core::traits::{check_index, slice_range};
use keel_core::{fatal, Element, Indexable, Iterable, Sliceable, ViewError};

use crate::raw;
use crate::read_only::ReadOnlySpan;

/// A mutable window over `len` elements of caller memory.
///
/// Writes go straight through to the caller's storage. A `Span` is
/// unique for its lifetime, so two spans can never alias the same
/// element; use [`reborrow`](Span::reborrow) to lend a span out
/// temporarily and keep using it afterwards.
pub struct Span<'a, T> {
    data: &'a mut [T],
}

impl<'a, T: Element> Span<'a, T> {
    /// Wrap an existing mutable slice.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// The empty view.
    #[inline]
    pub fn empty() -> Self {
        Self {
            data: Default::default(),
        }
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
    /// reads and writes of `T` for all of `'a`, and nothing else may
    /// access that memory during `'a`.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: isize) -> Self {
        // SAFETY: forwarded to the caller.
        Self {
            data: unsafe { raw::slice_from_raw_mut(ptr, len) },
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
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

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `index >= len()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        if let Err(e) = self.try_set(index, value) {
            fatal(e)
        }
    }

    /// Overwrite the element at `index`, or report why it is out of range.
    #[inline]
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), ViewError> {
        let i = check_index(index, self.len())?;
        self.data[i] = value;
        Ok(())
    }

    /// Exchange the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if either index is out of range.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        for i in [a, b] {
            if let Err(e) = check_index(i, len) {
                fatal(e)
            }
        }
        self.data.swap(a, b);
    }

    /// Narrow to `[start, start + len)`, or the empty view if it does
    /// not fit. Consumes the span; see [`reborrow`](Span::reborrow).
    #[inline]
    pub fn slice(self, start: usize, len: usize) -> Self {
        match slice_range(start, len, self.len()) {
            Some(r) => {
                let data = self.data;
                Self::new(&mut data[r])
            }
            None => Self::empty(),
        }
    }

    /// A shorter-lived span over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> Span<'_, T> {
        Span::new(&mut *self.data)
    }

    /// Read-only view of the same elements, borrowed from this span.
    #[inline]
    pub fn as_read_only(&self) -> ReadOnlySpan<'_, T> {
        ReadOnlySpan::new(&*self.data)
    }

    /// Give up write access, keeping the full lifetime.
    #[inline]
    pub fn into_read_only(self) -> ReadOnlySpan<'a, T> {
        ReadOnlySpan::new(self.data)
    }

    /// The underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// The underlying mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Give up the view, returning the slice for the full lifetime.
    #[inline]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.data
    }

    /// Iterate elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate elements by mutable reference.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Overwrite every element with `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Overwrite every element with [`Element::ZERO`].
    #[inline]
    pub fn clear(&mut self) {
        self.fill(T::ZERO);
    }

    /// Reverse the elements in place (`i` swaps with `len - 1 - i`).
    #[inline]
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Copy `min(len, dest.len())` elements into `dest` from index 0.
    ///
    /// Returns the number copied. Never writes past the end of `dest`.
    #[inline]
    pub fn copy_to(&self, dest: Span<'_, T>) -> usize {
        self.as_read_only().copy_to(dest)
    }

    /// Copy `min(len, src.len())` elements from `src` into this span.
    ///
    /// Returns the number copied.
    #[inline]
    pub fn copy_from(&mut self, src: ReadOnlySpan<'_, T>) -> usize {
        src.copy_to(self.reborrow())
    }
}

impl<T: Element> Default for Span<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Span<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element, const N: usize> From<&'a mut [T; N]> for Span<'a, T> {
    fn from(data: &'a mut [T; N]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element> From<Span<'a, T>> for ReadOnlySpan<'a, T> {
    fn from(span: Span<'a, T>) -> Self {
        span.into_read_only()
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Element + PartialEq> PartialEq for Span<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> Indexable<T> for Span<'_, T> {
    fn len(&self) -> usize {
        Span::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        Span::get(self, index)
    }
}

impl<'a, T: Element> Iterable<T> for Span<'a, T> {
    type Elements<'s>
        = std::iter::Copied<std::slice::Iter<'s, T>>
    where
        Self: 's;

    fn elements(&self) -> Self::Elements<'_> {
        self.data.iter().copied()
    }
}

impl<T: Element> Sliceable for Span<'_, T> {
    fn extent(&self) -> usize {
        self.len()
    }

    fn slice(self, start: usize, len: usize) -> Self {
        Span::slice(self, start, len)
    }
}
