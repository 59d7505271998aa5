use super::bounds::Extent;
use crate::{Error::InvalidRegion, Result};

/// In-memory backend: a borrowed region of fixed length plus a cursor position.
///
/// `B` is the borrowed region, `&[u8]` for readers and `&mut [u8]` for writers. The
/// capacity is the region length, fixed at construction. All accesses are plain slice
/// copies at the current position.
///
/// The `*_at_cursor` methods are the unchecked core shared by the checked and unchecked
/// entry points of the cursors: they assume the access was validated and panic on an
/// out-of-range slice instead of corrupting memory.
#[derive(Debug)]
pub struct Buffer<B> {
    data: B,
    position: usize,
}

impl<B: AsRef<[u8]>> Buffer<B> {
    /// Create a new buffer backend positioned at the start of `data`.
    ///
    /// ## Arguments
    /// * 'data' - The region to operate on
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `data` is empty.
    pub fn new(data: B) -> Result<Self> {
        if data.as_ref().is_empty() {
            return Err(InvalidRegion);
        }

        Ok(Buffer { data, position: 0 })
    }

    /// Extent handed to the bounds checker.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::Known {
            position: self.position,
            capacity: self.len(),
        }
    }

    /// Copies `out.len()` bytes at the current position into `out` and advances.
    pub fn read_at_cursor(&mut self, out: &mut [u8]) {
        let end = self.position + out.len();
        out.copy_from_slice(&self.data.as_ref()[self.position..end]);
        self.position = end;
    }

    /// Moves the cursor to `position`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfRange`] if `position` is not inside the region.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position >= self.len() {
            return Err(out_of_range_error!(position, 0, self.len()));
        }

        self.position = position;
        Ok(())
    }

    /// Puts the cursor back to a position it held before. Unlike [`Buffer::seek`] this
    /// accepts the end of the region, which a cursor reaches by reading its last byte.
    pub(crate) fn restore(&mut self, position: usize) {
        debug_assert!(position <= self.len());
        self.position = position;
    }

    /// Current cursor position.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.position
    }

    /// Declared capacity of the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    /// Always `false`, construction rejects empty regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_empty()
    }

    /// Bytes between the cursor and the end of the region.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.position
    }

    /// The complete region.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Gives the borrowed region back.
    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Buffer<B> {
    /// Copies `data` into the region at the current position and advances.
    pub fn write_at_cursor(&mut self, data: &[u8]) {
        let end = self.position + data.len();
        self.data.as_mut()[self.position..end].copy_from_slice(data);
        self.position = end;
    }

    /// The part of the region in front of the cursor.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data.as_ref()[..self.position]
    }
}
