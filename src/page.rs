use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;

use crate::error::PagedVecError;

/// Number of index bits addressing a slot inside a page.
pub const PAGE_BITS: u32 = 6;

/// Number of slots in every page.
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;

/// Mask selecting the in-page offset of a logical index.
pub const PAGE_MASK: usize = PAGE_SIZE - 1;

/// Splits a logical index into `(page, offset)`.
#[inline]
#[must_use]
pub(crate) const fn locate(index: usize) -> (usize, usize) {
    (index >> PAGE_BITS, index & PAGE_MASK)
}

/// Number of pages needed to hold `len` slots.
#[inline]
#[must_use]
pub(crate) const fn pages_for(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// A heap block of exactly `PAGE_SIZE` constructed slots.
///
/// The slot storage is allocated once and never reallocated, so the address
/// of every slot is fixed for the lifetime of the page. Moving the `Page`
/// value itself (for example when the page table grows) only moves the
/// owning pointer.
#[derive(Debug)]
pub(crate) struct Page<T> {
    slots: Box<[T]>,
}

impl<T: Default> Page<T> {
    /// Allocates a page with every slot set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `PagedVecError::AllocationFailed` if the allocator refuses the block.
    pub(crate) fn try_new() -> Result<Self, PagedVecError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(PAGE_SIZE)
            .map_err(|_| PagedVecError::AllocationFailed {
                layout: Layout::new::<[T; PAGE_SIZE]>(),
            })?;
        slots.resize_with(PAGE_SIZE, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

impl<T> Page<T> {
    #[inline]
    pub(crate) fn slots(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub(crate) fn into_slots(self) -> Vec<T> {
        self.slots.into_vec()
    }
}
