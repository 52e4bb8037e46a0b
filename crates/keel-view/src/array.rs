//! Root view over a whole caller-supplied block.

use std::fmt;

use keel_core::traits::{check_index, slice_range};
use keel_core::{fatal, Element, Indexable, Iterable, ViewError};

use crate::raw;
use crate::read_only::ReadOnlySpan;
use crate::span::Span;

/// A mutable view over an entire block of caller memory.
///
/// `Array` is where a block enters the view hierarchy. Narrowing it with
/// [`slice`](Array::slice) yields a [`Span`]; an `Array` is never a
/// sub-range of something else.
pub struct Array<'a, T> {
    data: &'a mut [T],
}

impl<'a, T: Element> Array<'a, T> {
    /// Wrap a caller-owned block.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// The empty array.
    #[inline]
    pub fn empty() -> Self {
        Self {
            data: Default::default(),
        }
    }

    /// Wrap `len` elements starting at `ptr`.
    ///
    /// # Panics
    ///
    /// Panics (the fatal path) if `len` is negative, or if `ptr` is null
    /// and `len` is positive.
    ///
    /// # Safety
    ///
    /// Same contract as [`Span::from_raw_parts`].
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

    /// Whether the array is empty.
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

    /// Mutable window over `[start, start + len)`, or the empty span if
    /// it does not fit. Consumes the array; call through
    /// [`as_span`](Array::as_span) to keep it.
    #[inline]
    pub fn slice(self, start: usize, len: usize) -> Span<'a, T> {
        match slice_range(start, len, self.len()) {
            Some(r) => {
                let data = self.data;
                Span::new(&mut data[r])
            }
            None => Span::empty(),
        }
    }

    /// The whole array as a span borrowed from it.
    #[inline]
    pub fn as_span(&mut self) -> Span<'_, T> {
        Span::new(&mut *self.data)
    }

    /// The whole array as a span for the full lifetime.
    #[inline]
    pub fn into_span(self) -> Span<'a, T> {
        Span::new(self.data)
    }

    /// Read-only view of the same elements.
    #[inline]
    pub fn as_read_only(&self) -> ReadOnlySpan<'_, T> {
        ReadOnlySpan::new(&*self.data)
    }

    /// The underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// Iterate elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
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

    /// Reverse the elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Copy `min(len, dest.len())` elements into `dest`. Returns the count.
    #[inline]
    pub fn copy_to(&self, dest: Span<'_, T>) -> usize {
        self.as_read_only().copy_to(dest)
    }
}

impl<T: Element> Default for Array<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Array<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element, const N: usize> From<&'a mut [T; N]> for Array<'a, T> {
    fn from(data: &'a mut [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Array<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Element> Indexable<T> for Array<'_, T> {
    fn len(&self) -> usize {
        Array::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        Array::get(self, index)
    }
}

impl<'a, T: Element> Iterable<T> for Array<'a, T> {
    type Elements<'s>
        = std::iter::Copied<std::slice::Iter<'s, T>>
    where
        Self: 's;

    fn elements(&self) -> Self::Elements<'_> {
        self.data.iter().copied()
    }
}
