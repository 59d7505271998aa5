use crate::Result;

/// A fixed-capacity page of a [`crate::PagedArena`].
///
/// The page owns its bytes and hands out consecutive slices of them; `length` only ever
/// grows until the arena is cleared.
#[derive(Debug)]
pub struct Page {
    data: Box<[u8]>,
    length: usize,
}

impl Page {
    /// Allocates a zeroed page of `capacity` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfRange`] if the allocator cannot provide `capacity` bytes.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Page> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| out_of_range_error!(0, capacity))?;
        data.resize(capacity, 0u8);

        Ok(Page {
            data: data.into_boxed_slice(),
            length: 0,
        })
    }

    /// Allocates a zeroed page of `capacity` bytes, aborting if the allocator fails.
    pub(crate) fn zeroed(capacity: usize) -> Page {
        Page {
            data: vec![0u8; capacity].into_boxed_slice(),
            length: 0,
        }
    }

    /// Returns `true` if `size` more bytes fit behind the used part.
    pub(crate) fn fits(&self, size: usize) -> bool {
        self.length
            .checked_add(size)
            .is_some_and(|end| end <= self.capacity())
    }

    /// Claims `size` bytes and returns their offset. The caller checked [`Page::fits`].
    pub(crate) fn bump(&mut self, size: usize) -> usize {
        let offset = self.length;
        self.length += size;
        offset
    }

    pub(crate) fn reset(&mut self) {
        self.length = 0;
    }

    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.data[offset..offset + len]
    }

    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.data[offset..offset + len]
    }

    /// Total bytes the page can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes handed out since creation or the last clear.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if nothing was allocated from this page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bytes still available.
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity() - self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_until_full() {
        let mut page = Page::with_capacity(16).unwrap();
        assert!(page.is_empty());
        assert!(page.fits(16));
        assert!(!page.fits(17));

        assert_eq!(page.bump(10), 0);
        assert_eq!(page.bump(6), 10);
        assert_eq!(page.len(), 16);
        assert_eq!(page.available(), 0);
        assert!(!page.fits(1));

        page.reset();
        assert!(page.is_empty());
        assert_eq!(page.capacity(), 16);
    }

    #[test]
    fn fits_rejects_overflow() {
        let mut page = Page::with_capacity(4).unwrap();
        page.bump(2);
        assert!(!page.fits(usize::MAX));
    }

    #[test]
    fn unsatisfiable_capacity() {
        assert!(matches!(
            Page::with_capacity(usize::MAX),
            Err(crate::Error::OutOfRange { .. })
        ));
    }
}
