//! Paged bump allocator.
//!
//! A [`PagedArena`] is an ordered list of fixed-capacity [`Page`]s. Allocation takes the
//! first page, in creation order, that still has room for the request and bumps its used
//! length. When no page has room, a new page of the default capacity doubled until the
//! request fits is appended. Pages are never split, merged or defragmented, and memory is
//! only given back all at once by [`PagedArena::free`] or dropping the arena.
//!
//! Allocations are identified by [`Span`] handles instead of raw pointers. Every span
//! carries the id of the arena that issued it and that arena's generation;
//! [`PagedArena::clear`] starts a new generation, so spans issued before the clear or by
//! another arena are rejected with [`crate::Error::InvalidHandle`] instead of aliasing
//! other allocations.
//!
//! # Usage Examples
//!
//! ```rust
//! use bytecursor::PagedArena;
//!
//! let mut arena = PagedArena::new(64)?;
//! let span = arena.alloc(8)?;
//!
//! arena.writer(span)?.write_u64_le(0xDEAD_BEEF)?;
//! assert_eq!(arena.reader(span)?.read_u64_le()?, 0xDEAD_BEEF);
//!
//! arena.clear();
//! assert!(arena.get(span).is_err());
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`PagedArena`] is [`Send`] but not internally synchronized; allocating takes
//! `&mut self`.

mod page;

pub use page::Page;

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::{
    Error::{InvalidHandle, InvalidRegion},
    Reader, Result, Writer,
};

/// Page capacity used by [`PagedArena::default`].
pub const DEFAULT_PAGE_CAPACITY: usize = 4096;

/// Source of arena ids, unique for the lifetime of the process.
static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

fn next_arena_id() -> u64 {
    NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a region handed out by a [`PagedArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    arena: u64,
    page: usize,
    offset: usize,
    len: usize,
    generation: u64,
}

impl Span {
    /// Index of the page holding the region.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Offset of the region inside its page.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, the arena never hands out empty regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A multi-page bump allocator handing out byte regions.
#[derive(Debug)]
pub struct PagedArena {
    id: u64,
    pages: Vec<Page>,
    default_capacity: usize,
    generation: u64,
}

impl PagedArena {
    /// Create an arena with one empty page of `default_page_capacity` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `default_page_capacity` is zero and
    /// [`crate::Error::OutOfRange`] if the first page cannot be allocated.
    pub fn new(default_page_capacity: usize) -> Result<PagedArena> {
        if default_page_capacity == 0 {
            return Err(InvalidRegion);
        }

        Ok(PagedArena {
            id: next_arena_id(),
            pages: vec![Page::with_capacity(default_page_capacity)?],
            default_capacity: default_page_capacity,
            generation: 0,
        })
    }

    /// Hands out `size` bytes from the first page with room for them, appending a new page
    /// if none has.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidValue`] if `size` is zero and
    /// [`crate::Error::OutOfRange`] if no page capacity of the form `default × 2^k` can
    /// hold `size` or the new page cannot be allocated.
    pub fn alloc(&mut self, size: usize) -> Result<Span> {
        if size == 0 {
            return Err(invalid_value_error!("zero-size allocation"));
        }

        let index = match self.pages.iter().position(|page| page.fits(size)) {
            Some(index) => index,
            None => self.grow(size)?,
        };

        let offset = self.pages[index].bump(size);
        Ok(Span {
            arena: self.id,
            page: index,
            offset,
            len: size,
            generation: self.generation,
        })
    }

    /// Appends a page large enough for `size` and returns its index.
    fn grow(&mut self, size: usize) -> Result<usize> {
        let mut capacity = self.default_capacity;
        while capacity < size {
            capacity = capacity
                .checked_mul(2)
                .ok_or_else(|| out_of_range_error!(0, size))?;
        }
        if capacity > isize::MAX as usize {
            return Err(out_of_range_error!(0, size));
        }

        let page = Page::with_capacity(capacity).map_err(|_| out_of_range_error!(0, size))?;
        debug!(
            index = self.pages.len(),
            capacity, size, "appending arena page"
        );
        self.pages.push(page);
        Ok(self.pages.len() - 1)
    }

    fn locate(&self, span: Span) -> Result<&Page> {
        if span.arena != self.id || span.generation != self.generation {
            return Err(InvalidHandle);
        }

        self.pages.get(span.page).ok_or(InvalidHandle)
    }

    /// The bytes of `span`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHandle`] if `span` was issued before the last
    /// [`PagedArena::clear`] or by another arena.
    pub fn get(&self, span: Span) -> Result<&[u8]> {
        let page = self.locate(span)?;
        if span.offset + span.len > page.len() {
            return Err(InvalidHandle);
        }

        Ok(page.slice(span.offset, span.len))
    }

    /// The bytes of `span`, mutably.
    ///
    /// # Errors
    /// See [`PagedArena::get`].
    pub fn get_mut(&mut self, span: Span) -> Result<&mut [u8]> {
        let page = self.locate(span)?;
        if span.offset + span.len > page.len() {
            return Err(InvalidHandle);
        }

        Ok(self.pages[span.page].slice_mut(span.offset, span.len))
    }

    /// A buffer-mode reader over `span`.
    ///
    /// # Errors
    /// See [`PagedArena::get`].
    pub fn reader(&self, span: Span) -> Result<Reader<'_>> {
        Reader::from_buffer(self.get(span)?)
    }

    /// A buffer-mode writer over `span`.
    ///
    /// # Errors
    /// See [`PagedArena::get`].
    pub fn writer(&mut self, span: Span) -> Result<Writer<'_>> {
        Writer::from_buffer(self.get_mut(span)?)
    }

    /// Marks every page as empty without giving memory back, and invalidates all spans
    /// issued so far. The next allocation starts at offset 0 of the first page.
    pub fn clear(&mut self) {
        for page in &mut self.pages {
            page.reset();
        }

        self.generation = self.generation.wrapping_add(1);
        debug!(
            pages = self.pages.len(),
            generation = self.generation,
            "cleared arena"
        );
    }

    /// Releases all pages.
    pub fn free(self) {
        debug!(pages = self.pages.len(), "freeing arena");
    }

    /// The pages in creation order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Capacity of the first page and the base of every grown page.
    #[must_use]
    pub fn default_page_capacity(&self) -> usize {
        self.default_capacity
    }
}

impl Default for PagedArena {
    fn default() -> Self {
        PagedArena {
            id: next_arena_id(),
            pages: vec![Page::zeroed(DEFAULT_PAGE_CAPACITY)],
            default_capacity: DEFAULT_PAGE_CAPACITY,
            generation: 0,
        }
    }
}
