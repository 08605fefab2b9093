#![no_std]

//! `PagedVec`: a growable vector stored in fixed-size pages.
//!
//! Elements are kept in pages of [`PAGE_SIZE`] (64) slots. The container owns a
//! table of page handles; growing appends pages to the table and never moves a
//! page, so existing elements keep their addresses across `push`, `reserve`
//! and growing `resize` calls. Only page handles are copied when the table
//! itself reallocates.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Index Mapping
//!
//! A logical index `i` lives in page `i >> PAGE_BITS` at offset
//! `i & PAGE_MASK`. Indexing with `[]` is not checked against the length: any
//! index below [`PagedVec::capacity`] reaches a valid slot. Use
//! [`PagedVec::get`] for a length-checked lookup.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: O(1), or O(`PAGE_SIZE`) when a new page is allocated
//! - `pop()`: O(1)
//! - `[]`, `get()`: O(1) - one shift and one mask
//! - `resize()`: O(n) in the number of slots entering or leaving the range
//! - `clear()`: O(capacity) - drops every page
//!
//! No operation copies existing elements.
//!
//! ## Page Policy
//! Pages are fully default-constructed when allocated, so every slot below
//! the capacity always holds a valid `T`. Slots leaving the logical range are
//! reset to `T::default()`; a page is dropped, with all its slots, once no
//! element lives in it.
//!
//! ```
//! # use pagedvec::PagedVec;
//! let mut paged = PagedVec::new();
//! paged.push(1);
//! paged.push(2);
//! paged.push(3);
//!
//! let first: *const i32 = &paged[0];
//! paged.resize(1000, 7);
//! assert_eq!(first, &paged[0] as *const i32);
//!
//! assert_eq!(paged.len(), 1000);
//! assert_eq!(paged.capacity(), 1024);
//! ```
//!
//! # Errors
//!
//! Growth methods have `try_*` variants returning [`PagedVecError`] on
//! allocation failure. The plain variants report failures the way `Vec`
//! does: `handle_alloc_error` or a capacity overflow panic.
//!
//! ```
//! # use pagedvec::PagedVec;
//! let mut paged = PagedVec::<u8>::new();
//! assert!(paged.try_reserve(100).is_ok());
//! assert_eq!(paged.capacity(), 128);
//! assert!(paged.is_empty());
//! ```
//!
//! # Cursor Support
//!
//! [`PagedVecCursor`] is a random-access position with C++-style arithmetic:
//!
//! ```
//! # use pagedvec::PagedVec;
//! let paged: PagedVec<u32> = (0..100).collect();
//!
//! let begin = paged.begin();
//! let end = paged.end();
//! assert_eq!(end - begin, 100);
//!
//! let mid = begin + 70;
//! assert_eq!(mid.get(), Some(&70));
//! assert_eq!(mid[-1], 69);
//! assert!(begin < mid && mid < end);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use pagedvec::PagedVec;
//! let mut paged: PagedVec<u32> = (0..5).collect();
//!
//! for value in &mut paged {
//!     *value *= 10;
//! }
//!
//! let collected: Vec<_> = paged.iter().copied().collect();
//! assert_eq!(collected, vec![0, 10, 20, 30, 40]);
//! ```

extern crate alloc;

mod core;
mod cursor;
mod error;
mod iter;
mod page;

// Re-export public types and constants
pub use crate::core::PagedVec;
pub use crate::cursor::{PagedVecCursor, PagedVecCursorMut};
pub use crate::error::PagedVecError;
pub use crate::iter::{PagedVecIntoIter, PagedVecIter, PagedVecIterMut};
pub use crate::page::{PAGE_BITS, PAGE_MASK, PAGE_SIZE};
