//! The reading cursor.
//!
//! [`Reader`] moves bytes out of a [`Source`], either a borrowed in-memory region or a
//! borrowed readable store, and turns them into typed values. Every access comes in a
//! checked form, which validates the access before anything is touched, and an
//! `*_unchecked` form sharing the same core that skips the validation.
//!
//! # Usage Examples
//!
//! ```rust
//! use bytecursor::{Endian, Reader};
//!
//! let data = [0x12, 0x34, 0x56, 0x78, 0x80];
//! let mut reader = Reader::from_buffer(&data)?;
//!
//! assert_eq!(reader.read_u32_be()?, 0x1234_5678);
//! assert!((reader.read_nu8()? - 0.50196).abs() < 1e-5);
//! assert!(reader.read_u8().is_err());
//!
//! reader.seek(0)?;
//! assert_eq!(reader.read_value::<u16>(Endian::Little)?, 0x3412);
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! A file-mode reader is built over anything that is [`std::io::Read`] and
//! [`std::io::Seek`]:
//!
//! ```rust
//! use bytecursor::Reader;
//! use std::io::Cursor;
//!
//! let mut store = Cursor::new(vec![0x00, 0x00, 0x80, 0x3F]);
//! let mut reader = Reader::from_file(&mut store);
//! assert_eq!(reader.read_f32_le()?, 1.0);
//! # Ok::<(), bytecursor::Error>(())
//! ```

use super::{
    bounds, decode, read_full, reorder, Backing, Buffer, Endian, Mode, Normalized, Primitive,
    ReadSeek,
};
use crate::{Error, ErrorFlags, Result};

/// Backend of a [`Reader`].
pub type Source<'a> = Backing<'a, &'a [u8], dyn ReadSeek + 'a>;

/// A cursor reading fixed-width values from a region or a store.
///
/// A reader created through [`Default`] is unbound: every access fails with
/// [`Error::InvalidHandle`] until it is replaced by a bound one.
#[derive(Debug, Default)]
pub struct Reader<'a> {
    source: Option<Source<'a>>,
}

impl<'a> Reader<'a> {
    /// Create a buffer-mode reader positioned at the start of `data`.
    ///
    /// # Arguments
    /// * `data` - The region to read from
    ///
    /// # Errors
    /// Returns [`Error::InvalidRegion`] if `data` is empty.
    pub fn from_buffer(data: &'a [u8]) -> Result<Self> {
        Ok(Reader {
            source: Some(Backing::Buffer(Buffer::new(data)?)),
        })
    }

    /// Create a file-mode reader over an already opened store.
    ///
    /// The store keeps its current offset; reading starts there.
    pub fn from_file<S: ReadSeek + 'a>(store: &'a mut S) -> Self {
        let store: &'a mut (dyn ReadSeek + 'a) = store;
        Reader {
            source: Some(Backing::File(store)),
        }
    }

    /// The storage medium, `None` if unbound.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.source.as_ref().map(Backing::mode)
    }

    /// Returns `true` if the reader has a backend.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.source.is_some()
    }

    /// Detaches and returns the backend, leaving the reader unbound.
    pub fn release(&mut self) -> Option<Source<'a>> {
        self.source.take()
    }

    /// Reports every condition that would make a read of `length` bytes fail.
    ///
    /// File-mode truncation cannot be known up front and is never reported here.
    #[must_use]
    pub fn diagnose(&self, length: usize) -> ErrorFlags {
        bounds::diagnose(self.source.as_ref().map(Backing::extent), length)
    }

    fn backing(&mut self) -> Result<&mut Source<'a>> {
        self.source.as_mut().ok_or(Error::InvalidHandle)
    }

    fn transfer(source: &mut Source<'a>, out: &mut [u8]) -> Result<()> {
        match source {
            Backing::Buffer(buffer) => {
                buffer.read_at_cursor(out);
                Ok(())
            }
            Backing::File(file) => read_full(&mut **file, out),
        }
    }

    /// Fills `out` from the current position and advances past it.
    ///
    /// # Errors
    /// - [`Error::InvalidHandle`] if the reader is unbound
    /// - [`Error::InvalidValue`] if `out` is empty
    /// - [`Error::OutOfRange`] if `out` does not fit into the rest of the region
    /// - [`Error::Truncated`] / [`Error::Io`] if the store fails
    pub fn read(&mut self, out: &mut [u8]) -> Result<()> {
        let source = self.backing()?;
        bounds::check(source.extent(), out.len())?;
        Self::transfer(source, out)
    }

    /// Fills `out` without validating the access first.
    ///
    /// # Panics
    /// Panics if `out` runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if the reader is unbound, and the store failures of
    /// [`Reader::read`] in file mode.
    pub fn read_unchecked(&mut self, out: &mut [u8]) -> Result<()> {
        let source = self.backing()?;
        Self::transfer(source, out)
    }

    /// Like [`Reader::read`], with the bytes of `out` in reverse order.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_reversed(&mut self, out: &mut [u8]) -> Result<()> {
        self.read(out)?;
        reorder(out, true);
        Ok(())
    }

    /// Like [`Reader::read_unchecked`], with the bytes of `out` in reverse order.
    ///
    /// # Panics
    /// Panics if `out` runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Reader::read_unchecked`].
    pub fn read_reversed_unchecked(&mut self, out: &mut [u8]) -> Result<()> {
        self.read_unchecked(out)?;
        reorder(out, true);
        Ok(())
    }

    /// Reads a `T` stored in the given byte order.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_value<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        let mut bytes = T::Bytes::default();
        self.read(bytes.as_mut())?;
        Ok(decode(bytes, endian))
    }

    /// Reads a `T` stored in the given byte order without validating the access first.
    ///
    /// # Panics
    /// Panics if the value runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Reader::read_unchecked`].
    pub fn read_value_unchecked<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        let mut bytes = T::Bytes::default();
        self.read_unchecked(bytes.as_mut())?;
        Ok(decode(bytes, endian))
    }

    /// Reads a `T` in host byte order.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_ne<T: Primitive>(&mut self) -> Result<T> {
        self.read_value(Endian::Native)
    }

    /// Reads a little-endian `T`.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_le<T: Primitive>(&mut self) -> Result<T> {
        self.read_value(Endian::Little)
    }

    /// Reads a big-endian `T`.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_be<T: Primitive>(&mut self) -> Result<T> {
        self.read_value(Endian::Big)
    }

    /// Reads a `T` and maps it onto its normalized range.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn read_normalized<T: Normalized>(&mut self, endian: Endian) -> Result<T::Float> {
        Ok(self.read_value::<T>(endian)?.denormalize())
    }

    /// Unchecked form of [`Reader::read_normalized`].
    ///
    /// # Panics
    /// Panics if the value runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Reader::read_unchecked`].
    pub fn read_normalized_unchecked<T: Normalized>(
        &mut self,
        endian: Endian,
    ) -> Result<T::Float> {
        Ok(self.read_value_unchecked::<T>(endian)?.denormalize())
    }

    /// Reads a `T` without moving the cursor.
    ///
    /// # Errors
    /// See [`Reader::read`].
    pub fn peek_value<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        let position = self.tell()?;
        let value = self.read_value::<T>(endian)?;
        self.backing()?.restore(position)?;
        Ok(value)
    }

    /// Runs `f` and puts the cursor back where it was if `f` fails.
    ///
    /// Useful for speculative parsing where input is only consumed if the whole
    /// structure could be read.
    ///
    /// # Errors
    /// Returns the error of `f`, or the failure to query or restore the position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Reader;
    ///
    /// let data = [0x01, 0x02, 0x03];
    /// let mut reader = Reader::from_buffer(&data)?;
    ///
    /// let pair = reader.transactional(|r| Ok((r.read_u16_le()?, r.read_u16_le()?)));
    /// assert!(pair.is_err());
    /// assert_eq!(reader.tell()?, 0);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let position = self.tell()?;
        match f(self) {
            Ok(value) => Ok(value),
            Err(error) => {
                if let Some(source) = self.source.as_mut() {
                    source.restore(position)?;
                }
                Err(error)
            }
        }
    }

    /// Moves the cursor to the absolute `position`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if unbound and [`Error::OutOfRange`] if a buffer
    /// position is not inside the region or the store rejects it.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.backing()?.seek(position)
    }

    /// Current position.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if unbound and [`Error::Io`] if the store fails.
    pub fn tell(&mut self) -> Result<usize> {
        self.backing()?.tell()
    }

    /// Total length of the backend.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if unbound and [`Error::Io`] if probing the store fails.
    pub fn len(&mut self) -> Result<usize> {
        self.backing()?.len()
    }

    /// Bytes left in front of the cursor.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if unbound and [`Error::Io`] if probing the store fails.
    pub fn remaining(&mut self) -> Result<usize> {
        self.backing()?.remaining()
    }

    read_accessors! {
        u8 => read_u8, read_u8_le, read_u8_be,
              read_u8_unchecked, read_u8_le_unchecked, read_u8_be_unchecked;
        i8 => read_i8, read_i8_le, read_i8_be,
              read_i8_unchecked, read_i8_le_unchecked, read_i8_be_unchecked;
        u16 => read_u16, read_u16_le, read_u16_be,
               read_u16_unchecked, read_u16_le_unchecked, read_u16_be_unchecked;
        i16 => read_i16, read_i16_le, read_i16_be,
               read_i16_unchecked, read_i16_le_unchecked, read_i16_be_unchecked;
        u32 => read_u32, read_u32_le, read_u32_be,
               read_u32_unchecked, read_u32_le_unchecked, read_u32_be_unchecked;
        i32 => read_i32, read_i32_le, read_i32_be,
               read_i32_unchecked, read_i32_le_unchecked, read_i32_be_unchecked;
        u64 => read_u64, read_u64_le, read_u64_be,
               read_u64_unchecked, read_u64_le_unchecked, read_u64_be_unchecked;
        i64 => read_i64, read_i64_le, read_i64_be,
               read_i64_unchecked, read_i64_le_unchecked, read_i64_be_unchecked;
        f32 => read_f32, read_f32_le, read_f32_be,
               read_f32_unchecked, read_f32_le_unchecked, read_f32_be_unchecked;
        f64 => read_f64, read_f64_le, read_f64_be,
               read_f64_unchecked, read_f64_le_unchecked, read_f64_be_unchecked;
    }

    read_normalized_accessors! {
        u8 as f32 => read_nu8, read_nu8_le, read_nu8_be,
                     read_nu8_unchecked, read_nu8_le_unchecked, read_nu8_be_unchecked;
        i8 as f32 => read_ni8, read_ni8_le, read_ni8_be,
                     read_ni8_unchecked, read_ni8_le_unchecked, read_ni8_be_unchecked;
        u16 as f32 => read_nu16, read_nu16_le, read_nu16_be,
                      read_nu16_unchecked, read_nu16_le_unchecked, read_nu16_be_unchecked;
        i16 as f32 => read_ni16, read_ni16_le, read_ni16_be,
                      read_ni16_unchecked, read_ni16_le_unchecked, read_ni16_be_unchecked;
        u32 as f64 => read_nu32, read_nu32_le, read_nu32_be,
                      read_nu32_unchecked, read_nu32_le_unchecked, read_nu32_be_unchecked;
        i32 as f64 => read_ni32, read_ni32_le, read_ni32_be,
                      read_ni32_unchecked, read_ni32_le_unchecked, read_ni32_be_unchecked;
        u64 as f64 => read_nu64, read_nu64_le, read_nu64_be,
                      read_nu64_unchecked, read_nu64_le_unchecked, read_nu64_be_unchecked;
        i64 as f64 => read_ni64, read_ni64_le, read_ni64_be,
                      read_ni64_unchecked, read_ni64_le_unchecked, read_ni64_be_unchecked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn typed_reads() {
        let data = [
            0x01, // u8
            0xFE, 0xFF, // i16 le
            0x12, 0x34, 0x56, 0x78, // u32 be
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F, // f64 le
        ];
        let mut reader = Reader::from_buffer(&data).unwrap();

        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_i16_le().unwrap(), -2);
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_f64_le().unwrap(), 1.0);
        assert_eq!(reader.remaining().unwrap(), 0);
    }

    #[test]
    fn endianness_symmetry() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let mut reader = Reader::from_buffer(&data).unwrap();
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
        reader.seek(0).unwrap();
        assert_eq!(reader.read_u32_le().unwrap(), 0x7856_3412);
        reader.seek(0).unwrap();
        assert_eq!(reader.read_ne::<u32>().unwrap(), u32::from_ne_bytes(data));
    }

    #[test]
    fn out_of_range_keeps_position() {
        let data = vec![0u8; 1024];
        let mut reader = Reader::from_buffer(&data).unwrap();
        reader.seek(1020).unwrap();

        let result = reader.read_u64();
        assert!(matches!(
            result,
            Err(Error::OutOfRange {
                position: 1020,
                length: 8,
                capacity: Some(1024)
            })
        ));
        assert_eq!(reader.tell().unwrap(), 1020);
        assert_eq!(reader.read_u32().unwrap(), 0);
    }

    #[test]
    fn unbound_reader() {
        let mut reader = Reader::default();
        assert!(!reader.is_bound());
        assert_eq!(reader.mode(), None);
        assert!(matches!(reader.read_u8(), Err(Error::InvalidHandle)));
        assert!(matches!(reader.read_u8_unchecked(), Err(Error::InvalidHandle)));
        assert!(matches!(reader.tell(), Err(Error::InvalidHandle)));
        assert!(matches!(reader.seek(0), Err(Error::InvalidHandle)));
    }

    #[test]
    fn release_unbinds() {
        let data = [1u8, 2];
        let mut reader = Reader::from_buffer(&data).unwrap();
        assert_eq!(reader.mode(), Some(Mode::Buffer));

        let source = reader.release();
        assert!(matches!(source, Some(Backing::Buffer(_))));
        assert!(matches!(reader.read_u8(), Err(Error::InvalidHandle)));
    }

    #[test]
    fn zero_length_read() {
        let data = [1u8, 2];
        let mut reader = Reader::from_buffer(&data).unwrap();
        let mut out = [0u8; 0];
        assert!(matches!(
            reader.read(&mut out),
            Err(Error::InvalidValue { .. })
        ));
        assert_eq!(reader.tell().unwrap(), 0);
    }

    #[test]
    fn reversed_read() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = Reader::from_buffer(&data).unwrap();
        let mut out = [0u8; 5];
        reader.read_reversed(&mut out).unwrap();
        assert_eq!(out, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn diagnose_reports_all() {
        let data = [0u8; 8];
        let mut reader = Reader::from_buffer(&data).unwrap();
        reader.seek(6).unwrap();
        assert_eq!(reader.diagnose(4), ErrorFlags::OUT_OF_RANGE);
        assert_eq!(reader.diagnose(2), ErrorFlags::empty());
        assert_eq!(reader.diagnose(0), ErrorFlags::INVALID_VALUE);
    }

    #[test]
    fn normalized_reads() {
        let data = [0x80, 0xFF, 0x81, 0x7F, 0xFF, 0xFF];
        let mut reader = Reader::from_buffer(&data).unwrap();

        let half = reader.read_nu8().unwrap();
        assert!((half - 0.50196).abs() < 1e-5);
        assert_eq!(reader.read_nu8().unwrap(), 1.0);
        assert_eq!(reader.read_ni8().unwrap(), -1.0);
        assert_eq!(reader.read_ni8().unwrap(), 1.0);
        assert_eq!(reader.read_nu16_le().unwrap(), 1.0);
    }

    #[test]
    fn peek_does_not_advance() {
        let data = [0xAA, 0xBB];
        let mut reader = Reader::from_buffer(&data).unwrap();
        assert_eq!(reader.peek_value::<u16>(Endian::Big).unwrap(), 0xAABB);
        assert_eq!(reader.tell().unwrap(), 0);

        reader.read_u8().unwrap();
        assert_eq!(reader.peek_value::<u8>(Endian::Native).unwrap(), 0xBB);
        reader.read_u8().unwrap();
        assert_eq!(reader.tell().unwrap(), 2);
    }

    #[test]
    fn transactional_commits_on_success() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::from_buffer(&data).unwrap();
        let value = reader
            .transactional(|r| Ok(r.read_u16_be()? + r.read_u16_be()?))
            .unwrap();
        assert_eq!(value, 0x0102 + 0x0304);
        assert_eq!(reader.tell().unwrap(), 4);
    }

    #[test]
    fn file_mode_reads() {
        let mut store = Cursor::new(vec![0x12, 0x34, 0x56, 0x78, 0x9A]);
        let mut reader = Reader::from_file(&mut store);

        assert_eq!(reader.mode(), Some(Mode::File));
        assert_eq!(reader.len().unwrap(), 5);
        assert_eq!(reader.read_u16_be().unwrap(), 0x1234);
        assert_eq!(reader.read_u16_le().unwrap(), 0x7856);
        assert_eq!(reader.remaining().unwrap(), 1);

        let result = reader.read_u32();
        assert!(matches!(
            result,
            Err(Error::Truncated {
                requested: 4,
                available: 1
            })
        ));
        assert_eq!(reader.tell().unwrap(), 4);
        assert_eq!(reader.read_u8().unwrap(), 0x9A);
    }

    #[test]
    fn file_mode_peek_and_transactional() {
        let mut store = Cursor::new(vec![0x00, 0x01, 0x02]);
        let mut reader = Reader::from_file(&mut store);

        assert_eq!(reader.peek_value::<u16>(Endian::Big).unwrap(), 0x0001);
        assert_eq!(reader.tell().unwrap(), 0);

        let result = reader.transactional(|r| {
            r.read_u16()?;
            r.read_u16()
        });
        assert!(result.is_err());
        assert_eq!(reader.tell().unwrap(), 0);
    }

    #[test]
    #[should_panic]
    fn unchecked_buffer_read_panics_past_the_end() {
        let data = [0u8; 2];
        let mut reader = Reader::from_buffer(&data).unwrap();
        let _ = reader.read_u32_unchecked();
    }

    #[test]
    fn unchecked_file_read_still_reports_truncation() {
        let mut store = Cursor::new(vec![0u8; 2]);
        let mut reader = Reader::from_file(&mut store);
        assert!(matches!(
            reader.read_u32_unchecked(),
            Err(Error::Truncated { .. })
        ));
    }
}
