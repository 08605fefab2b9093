//! Random-access cursors over a `PagedVec`.
//!
//! A cursor is a logical index paired with a reference to its owning
//! container. Reads go through the page mapping on every access, so a cursor
//! stays usable while the container grows; reads are limited by the capacity,
//! not the length, mirroring `PagedVec` indexing.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

use crate::core::PagedVec;

#[inline]
fn offset_index(index: usize, delta: isize) -> usize {
    match index.checked_add_signed(delta) {
        Some(moved) => moved,
        None => panic!("Cursor offset {delta} from index {index} is out of range"),
    }
}

/// Shared random-access cursor.
///
/// Equality requires the same index and the same owning container.
/// Cursors of different containers are unordered.
pub struct PagedVecCursor<'a, T> {
    owner: &'a PagedVec<T>,
    index: usize,
}

impl<'a, T> PagedVecCursor<'a, T> {
    pub(crate) fn new(owner: &'a PagedVec<T>, index: usize) -> Self {
        Self { owner, index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor.
    ///
    /// Returns `None` if the index is at or past the owner's capacity.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.owner.slot(self.index)
    }

    /// The element `offset` positions away from the cursor.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let index = self.index.checked_add_signed(offset)?;
        self.owner.slot(index)
    }

    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }
}

impl<T> Clone for PagedVecCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedVecCursor<'_, T> {}

impl<T> fmt::Debug for PagedVecCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedVecCursor")
            .field("index", &self.index)
            .field("len", &self.owner.len())
            .finish()
    }
}

impl<T> AddAssign<isize> for PagedVecCursor<'_, T> {
    fn add_assign(&mut self, delta: isize) {
        self.index = offset_index(self.index, delta);
    }
}

impl<T> SubAssign<isize> for PagedVecCursor<'_, T> {
    fn sub_assign(&mut self, delta: isize) {
        self.index = offset_index(self.index, delta.wrapping_neg());
    }
}

impl<T> Add<isize> for PagedVecCursor<'_, T> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<T> Sub<isize> for PagedVecCursor<'_, T> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}

/// Signed distance between two cursors.
impl<T> Sub for PagedVecCursor<'_, T> {
    type Output = isize;

    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Self) -> isize {
        self.index.wrapping_sub(rhs.index) as isize
    }
}

impl<T> Index<isize> for PagedVecCursor<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the target index is outside the owner's capacity.
    fn index(&self, offset: isize) -> &T {
        &self.owner[offset_index(self.index, offset)]
    }
}

impl<T> PartialEq for PagedVecCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && core::ptr::eq(self.owner, other.owner)
    }
}

impl<T> Eq for PagedVecCursor<'_, T> {}

impl<T> PartialOrd for PagedVecCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if core::ptr::eq(self.owner, other.owner) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

/// Mutable random-access cursor.
///
/// Holds the owning container exclusively for its lifetime.
pub struct PagedVecCursorMut<'a, T> {
    owner: &'a mut PagedVec<T>,
    index: usize,
}

impl<'a, T> PagedVecCursorMut<'a, T> {
    pub(crate) fn new(owner: &'a mut PagedVec<T>, index: usize) -> Self {
        Self { owner, index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.owner.slot(self.index)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.owner.slot_mut(self.index)
    }

    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<&T> {
        let index = self.index.checked_add_signed(offset)?;
        self.owner.slot(index)
    }

    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        let index = self.index.checked_add_signed(offset)?;
        self.owner.slot_mut(index)
    }

    /// Consumes the cursor, returning the element under it for the full
    /// borrow of the container.
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self { owner, index } = self;
        owner.slot_mut(index)
    }

    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// A shared cursor at the same position, borrowing from this one.
    #[must_use]
    pub fn as_cursor(&self) -> PagedVecCursor<'_, T> {
        PagedVecCursor::new(self.owner, self.index)
    }
}

impl<T> fmt::Debug for PagedVecCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedVecCursorMut")
            .field("index", &self.index)
            .field("len", &self.owner.len())
            .finish()
    }
}

impl<T> AddAssign<isize> for PagedVecCursorMut<'_, T> {
    fn add_assign(&mut self, delta: isize) {
        self.index = offset_index(self.index, delta);
    }
}

impl<T> SubAssign<isize> for PagedVecCursorMut<'_, T> {
    fn sub_assign(&mut self, delta: isize) {
        self.index = offset_index(self.index, delta.wrapping_neg());
    }
}
