use core::alloc::Layout;

use thiserror::Error;

/// Error types for fallible `PagedVec` growth
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PagedVecError {
    /// The allocator could not provide a page or a page table block
    #[error("Allocation failed: could not allocate {} bytes (align {})", .layout.size(), .layout.align())]
    AllocationFailed {
        /// Layout of the refused allocation
        layout: Layout,
    },
    /// The requested length does not fit in memory addressing limits
    #[error("Capacity overflow: {requested} elements cannot be addressed")]
    CapacityOverflow {
        /// Number of elements that was requested
        requested: usize,
    },
}

impl PagedVecError {
    /// Escalates the error the way the standard collections do.
    ///
    /// Allocation failures go to `handle_alloc_error`, overflows panic.
    pub(crate) fn raise(self) -> ! {
        match self {
            PagedVecError::AllocationFailed { layout } => alloc::alloc::handle_alloc_error(layout),
            PagedVecError::CapacityOverflow { .. } => panic!("capacity overflow"),
        }
    }
}
