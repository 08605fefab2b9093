use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::ops::{Bound, Index, IndexMut, RangeBounds};

use tracing::{debug, trace};

use crate::cursor::{PagedVecCursor, PagedVecCursorMut};
use crate::error::PagedVecError;
use crate::iter::{PagedVecIter, PagedVecIterMut};
use crate::page::{locate, pages_for, Page, PAGE_SIZE};

/// A growable vector that stores its elements in fixed-size pages.
///
/// Elements live in pages of `PAGE_SIZE` slots. Growth appends pages and never
/// moves an existing page, so a reference to an element stays at the same
/// address across `push`, `reserve` and growing `resize` calls.
pub struct PagedVec<T> {
    pages: Vec<Page<T>>,
    len: usize,
}

impl<T> PagedVec<T> {
    /// Creates an empty `PagedVec`. No pages are allocated.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pages: Vec::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots available without allocating another page.
    ///
    /// Always a multiple of `PAGE_SIZE`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pages.len() * PAGE_SIZE
    }

    /// Number of pages currently allocated.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is beyond the logical length.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self[index])
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// Returns `None` if the index is beyond the logical length.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        Some(&mut self[index])
    }

    /// Returns the last element, or `None` if the vector is empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        let index = self.len.checked_sub(1)?;
        Some(&self[index])
    }

    /// Returns the last element mutably, or `None` if the vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let index = self.len.checked_sub(1)?;
        Some(&mut self[index])
    }

    /// Slot lookup bounded by the capacity instead of the length.
    pub(crate) fn slot(&self, index: usize) -> Option<&T> {
        let (page, offset) = locate(index);
        self.pages.get(page).map(|page| &page.slots()[offset])
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        let (page, offset) = locate(index);
        self.pages
            .get_mut(page)
            .map(|page| &mut page.slots_mut()[offset])
    }

    pub(crate) fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    pub(crate) fn into_parts(self) -> (Vec<Page<T>>, usize) {
        (self.pages, self.len)
    }

    /// Drops every page and resets the length to zero.
    ///
    /// The page table keeps its allocation; element storage is released.
    pub fn clear(&mut self) {
        if !self.pages.is_empty() {
            debug!(pages = self.pages.len(), len = self.len, "clearing paged vector");
        }
        self.pages.clear();
        self.len = 0;
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> PagedVecIter<'_, T> {
        PagedVecIter::new(self, 0, self.len)
    }

    /// Returns a mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> PagedVecIterMut<'_, T> {
        PagedVecIterMut::new(&mut self.pages, self.len)
    }

    /// Returns an iterator over a sub-range of the elements.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or ends beyond the length.
    #[must_use]
    pub fn range<R: RangeBounds<usize>>(&self, range: R) -> PagedVecIter<'_, T> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        assert!(
            start <= end && end <= self.len,
            "Range {}..{} out of bounds for vector of length {}",
            start,
            end,
            self.len
        );
        PagedVecIter::new(self, start, end)
    }

    /// Cursor positioned at the first element.
    #[must_use]
    pub fn begin(&self) -> PagedVecCursor<'_, T> {
        PagedVecCursor::new(self, 0)
    }

    /// Cursor positioned one past the last element.
    #[must_use]
    pub fn end(&self) -> PagedVecCursor<'_, T> {
        PagedVecCursor::new(self, self.len)
    }

    /// Cursor positioned at `index`.
    #[must_use]
    pub fn cursor(&self, index: usize) -> PagedVecCursor<'_, T> {
        PagedVecCursor::new(self, index)
    }

    /// Mutable cursor positioned at the first element.
    pub fn begin_mut(&mut self) -> PagedVecCursorMut<'_, T> {
        PagedVecCursorMut::new(self, 0)
    }

    /// Mutable cursor positioned at `index`.
    pub fn cursor_mut(&mut self, index: usize) -> PagedVecCursorMut<'_, T> {
        PagedVecCursorMut::new(self, index)
    }

    fn truncate_pages(&mut self, target: usize) {
        if target < self.pages.len() {
            trace!(from = self.pages.len(), to = target, "dropping pages");
            self.pages.truncate(target);
        }
    }
}

impl<T: Default> PagedVec<T> {
    /// Ensures room for at least `min_capacity` elements in total.
    ///
    /// Does nothing unless `min_capacity` exceeds the current length. Only
    /// appends pages; existing pages and elements are never touched.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve(min_capacity) {
            err.raise();
        }
    }

    /// Fallible form of [`PagedVec::reserve`].
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::AllocationFailed` if a page or the page table
    /// cannot be allocated.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), PagedVecError> {
        if min_capacity > self.len {
            self.try_grow_pages(pages_for(min_capacity))?;
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Shrinking resets the removed slots to `T::default()` and drops pages
    /// that no longer hold any element. Growing allocates pages as needed
    /// and assigns `f()` to every slot in `[old_len, new_len)`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        if let Err(err) = self.try_resize_with(new_len, f) {
            err.raise();
        }
    }

    /// Fallible form of [`PagedVec::resize_with`].
    ///
    /// On error the length and all elements are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::AllocationFailed` if a page or the page table
    /// cannot be allocated.
    pub fn try_resize_with<F: FnMut() -> T>(
        &mut self,
        new_len: usize,
        mut f: F,
    ) -> Result<(), PagedVecError> {
        let old_len = self.len;
        if new_len < old_len {
            self.reset_range(new_len, old_len);
            self.truncate_pages(pages_for(new_len));
        }

        self.try_grow_pages(pages_for(new_len))?;

        for index in old_len..new_len {
            self[index] = f();
        }
        self.len = new_len;
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }

    /// Fallible form of [`PagedVec::resize_default`].
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::AllocationFailed` if a page or the page table
    /// cannot be allocated.
    pub fn try_resize_default(&mut self, new_len: usize) -> Result<(), PagedVecError> {
        self.try_resize_with(new_len, T::default)
    }

    /// Shortens the vector to `new_len`. No effect if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.reset_range(new_len, self.len);
            self.truncate_pages(pages_for(new_len));
            self.len = new_len;
        }
    }

    /// Appends an element.
    ///
    /// O(1) while the last page has room, O(`PAGE_SIZE`) when a new page is
    /// allocated. Existing elements are never copied.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            err.raise();
        }
    }

    /// Fallible form of [`PagedVec::push`].
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::CapacityOverflow` if the length would exceed
    /// `usize::MAX`, `PagedVecError::AllocationFailed` if a new page cannot
    /// be allocated.
    pub fn try_push(&mut self, value: T) -> Result<(), PagedVecError> {
        let index = self.len;
        let new_len = index
            .checked_add(1)
            .ok_or(PagedVecError::CapacityOverflow { requested: index })?;
        self.try_grow_pages(pages_for(new_len))?;
        self[index] = value;
        self.len = new_len;
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// The slot is left holding `T::default()`; a page that no longer holds
    /// any element is dropped.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        let value = core::mem::take(&mut self[index]);
        self.len = index;
        self.truncate_pages(pages_for(index));
        Some(value)
    }

    /// Drops the values in `[start, end)` that stay inside retained pages.
    ///
    /// Slots in pages about to be dropped are released with their page.
    fn reset_range(&mut self, start: usize, end: usize) {
        let retained = pages_for(start) * PAGE_SIZE;
        for index in start..end.min(retained) {
            self[index] = T::default();
        }
    }

    fn try_grow_pages(&mut self, target: usize) -> Result<(), PagedVecError> {
        let current = self.pages.len();
        if target <= current {
            return Ok(());
        }

        let layout =
            Layout::array::<Page<T>>(target).map_err(|_| PagedVecError::CapacityOverflow {
                requested: target.saturating_mul(PAGE_SIZE),
            })?;
        self.pages
            .try_reserve(target - current)
            .map_err(|_| PagedVecError::AllocationFailed { layout })?;

        trace!(from = current, to = target, "allocating pages");
        for _ in current..target {
            self.pages.push(Page::try_new()?);
        }
        Ok(())
    }
}

impl<T: Clone + Default> PagedVec<T> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }

    /// Fallible form of [`PagedVec::resize`].
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::AllocationFailed` if a page or the page table
    /// cannot be allocated.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), PagedVecError> {
        self.try_resize_with(new_len, || value.clone())
    }
}

impl<T> Default for PagedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy sized to the source's logical length.
impl<T: Clone + Default> Clone for PagedVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.clone_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.resize_default(source.len);
        for (dst, src) in self.iter_mut().zip(source.iter()) {
            dst.clone_from(src);
        }
    }
}

impl<T> Index<usize> for PagedVec<T> {
    type Output = T;

    /// Unchecked against the length: any index below `capacity()` is valid.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    fn index(&self, index: usize) -> &T {
        let (page, offset) = locate(index);
        &self.pages[page].slots()[offset]
    }
}

impl<T> IndexMut<usize> for PagedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let (page, offset) = locate(index);
        &mut self.pages[page].slots_mut()[offset]
    }
}

impl<T: fmt::Debug> fmt::Debug for PagedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for PagedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PagedVec<T> {}

impl<T: Default> Extend<T> for PagedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for PagedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut paged = Self::new();
        paged.extend(iter);
        paged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_nothing() {
        let paged = PagedVec::<u8>::new();
        assert_eq!(paged.page_count(), 0);
        assert_eq!(paged.capacity(), 0);
    }

    #[test]
    fn test_shrink_resets_retained_tail() {
        let mut paged = PagedVec::new();
        paged.resize(10, 7u32);
        paged.resize_default(4);

        assert_eq!(paged.page_count(), 1);
        for index in 4..PAGE_SIZE {
            assert_eq!(paged.slot(index), Some(&0));
        }
    }

    #[test]
    fn test_slot_bounded_by_capacity() {
        let mut paged = PagedVec::<u32>::new();
        paged.push(1);
        assert_eq!(paged.slot(PAGE_SIZE - 1), Some(&0));
        assert_eq!(paged.slot(PAGE_SIZE), None);
        assert!(paged.slot_mut(PAGE_SIZE).is_none());
    }

    #[test]
    fn test_grow_pages_is_noop_when_large_enough() {
        let mut paged = PagedVec::<u32>::new();
        paged.try_grow_pages(3).unwrap();
        assert_eq!(paged.page_count(), 3);
        paged.try_grow_pages(2).unwrap();
        assert_eq!(paged.page_count(), 3);
    }

    #[test]
    fn test_grow_pages_reports_overflow() {
        let mut paged = PagedVec::<u32>::new();
        assert!(matches!(
            paged.try_grow_pages(usize::MAX),
            Err(PagedVecError::CapacityOverflow { .. })
        ));
        assert_eq!(paged.page_count(), 0);
    }
}
