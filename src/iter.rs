use alloc::vec::{self, Vec};
use core::iter::FusedIterator;

use crate::core::PagedVec;
use crate::page::{locate, Page, PAGE_SIZE};

/// Iterator over the elements of a `PagedVec`
///
/// Positions are logical indices, so `nth` and `nth_back` jump in O(1).
/// This iterator implements `Clone`.
pub struct PagedVecIter<'a, T> {
    pages: &'a [Page<T>],
    front: usize,
    back: usize,
}

impl<'a, T> PagedVecIter<'a, T> {
    pub(crate) fn new(paged: &'a PagedVec<T>, front: usize, back: usize) -> Self {
        Self {
            pages: paged.pages(),
            front,
            back,
        }
    }

    fn slot(&self, index: usize) -> &'a T {
        let (page, offset) = locate(index);
        &self.pages[page].slots()[offset]
    }
}

impl<T> Clone for PagedVecIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pages: self.pages,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for PagedVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.slot(self.front);
        self.front += 1;
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn count(self) -> usize {
        self.back - self.front
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for PagedVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot(self.back))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        if n >= remaining {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<T> ExactSizeIterator for PagedVecIter<'_, T> {}

impl<T> FusedIterator for PagedVecIter<'_, T> {}

impl<'a, T> IntoIterator for &'a PagedVec<T> {
    type Item = &'a T;
    type IntoIter = PagedVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable iterator over the elements of a `PagedVec`
///
/// Walks whole pages, with the partially filled last page cut to the
/// logical length up front.
pub struct PagedVecIterMut<'a, T> {
    pages: core::slice::IterMut<'a, Page<T>>,
    front: core::slice::IterMut<'a, T>,
    back: core::slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T> PagedVecIterMut<'a, T> {
    pub(crate) fn new(pages: &'a mut [Page<T>], len: usize) -> Self {
        let (full, rest) = pages.split_at_mut(len / PAGE_SIZE);
        let tail = len % PAGE_SIZE;
        let back = match rest.first_mut() {
            Some(page) if tail > 0 => page.slots_mut()[..tail].iter_mut(),
            _ => Default::default(),
        };
        Self {
            pages: full.iter_mut(),
            front: Default::default(),
            back,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PagedVecIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.front.next() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.pages.next() {
                Some(page) => self.front = page.slots_mut().iter_mut(),
                None => {
                    let item = self.back.next()?;
                    self.remaining -= 1;
                    return Some(item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for PagedVecIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.back.next_back() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.pages.next_back() {
                Some(page) => self.back = page.slots_mut().iter_mut(),
                None => {
                    let item = self.front.next_back()?;
                    self.remaining -= 1;
                    return Some(item);
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for PagedVecIterMut<'_, T> {}

impl<T> FusedIterator for PagedVecIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut PagedVec<T> {
    type Item = &'a mut T;
    type IntoIter = PagedVecIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the elements of a `PagedVec`
///
/// Pages are released one by one as the iteration moves past them.
pub struct PagedVecIntoIter<T> {
    pages: vec::IntoIter<Page<T>>,
    current: vec::IntoIter<T>,
    remaining: usize,
}

impl<T> Iterator for PagedVecIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.current = self.pages.next()?.into_slots().into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PagedVecIntoIter<T> {}

impl<T> FusedIterator for PagedVecIntoIter<T> {}

impl<T> IntoIterator for PagedVec<T> {
    type Item = T;
    type IntoIter = PagedVecIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (pages, len) = self.into_parts();
        PagedVecIntoIter {
            pages: pages.into_iter(),
            current: Vec::new().into_iter(),
            remaining: len,
        }
    }
}
