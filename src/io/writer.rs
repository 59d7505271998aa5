//! The writing cursor.
//!
//! [`Writer`] is the mirror image of [`crate::Reader`]: it encodes typed values and moves
//! them into a [`Sink`], either a borrowed mutable region or a borrowed writable store.
//! Every typed write emits exactly the size of the value in the selected byte order, with
//! no padding or framing.
//!
//! ```rust
//! use bytecursor::Writer;
//!
//! let mut data = [0u8; 6];
//! let mut writer = Writer::from_buffer(&mut data)?;
//! writer.write_u32_be(0x1234_5678)?;
//! writer.write_nu8(0.5)?;
//! assert!(writer.write_nu8(1.5).is_err());
//! assert_eq!(writer.written(), Some(&[0x12, 0x34, 0x56, 0x78, 0x80][..]));
//! # Ok::<(), bytecursor::Error>(())
//! ```

use std::io::Write;

use super::{
    bounds, encode, reorder, write_full, Backing, Buffer, Endian, Mode, Normalized, Primitive,
    WriteSeek,
};
use crate::{Error, ErrorFlags, Result};

/// Backend of a [`Writer`].
pub type Sink<'a> = Backing<'a, &'a mut [u8], dyn WriteSeek + 'a>;

/// A cursor writing fixed-width values into a region or a store.
///
/// A writer created through [`Default`] is unbound: every access fails with
/// [`Error::InvalidHandle`].
#[derive(Debug, Default)]
pub struct Writer<'a> {
    sink: Option<Sink<'a>>,
}

impl<'a> Writer<'a> {
    /// Create a buffer-mode writer positioned at the start of `data`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRegion`] if `data` is empty.
    pub fn from_buffer(data: &'a mut [u8]) -> Result<Self> {
        Ok(Writer {
            sink: Some(Backing::Buffer(Buffer::new(data)?)),
        })
    }

    /// Create a file-mode writer over an already opened store.
    ///
    /// The store keeps its current offset; writing starts there.
    pub fn from_file<S: WriteSeek + 'a>(store: &'a mut S) -> Self {
        let store: &'a mut (dyn WriteSeek + 'a) = store;
        Writer {
            sink: Some(Backing::File(store)),
        }
    }

    /// The storage medium, `None` if unbound.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.sink.as_ref().map(Backing::mode)
    }

    /// Returns `true` if the writer has a backend.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.sink.is_some()
    }

    /// Detaches and returns the backend, leaving the writer unbound.
    pub fn release(&mut self) -> Option<Sink<'a>> {
        self.sink.take()
    }

    /// Reports every condition that would make a write of `length` bytes fail.
    #[must_use]
    pub fn diagnose(&self, length: usize) -> ErrorFlags {
        bounds::diagnose(self.sink.as_ref().map(Backing::extent), length)
    }

    /// In buffer mode, the part of the region written so far (everything in front of the
    /// cursor). `None` for file mode or when unbound.
    #[must_use]
    pub fn written(&self) -> Option<&[u8]> {
        match self.sink.as_ref()? {
            Backing::Buffer(buffer) => Some(buffer.written()),
            Backing::File(_) => None,
        }
    }

    fn backing(&mut self) -> Result<&mut Sink<'a>> {
        self.sink.as_mut().ok_or(Error::InvalidHandle)
    }

    fn transfer(sink: &mut Sink<'a>, data: &[u8]) -> Result<()> {
        match sink {
            Backing::Buffer(buffer) => {
                buffer.write_at_cursor(data);
                Ok(())
            }
            Backing::File(file) => write_full(&mut **file, data),
        }
    }

    /// Copies `data` to the current position and advances past it.
    ///
    /// # Errors
    /// - [`Error::InvalidHandle`] if the writer is unbound
    /// - [`Error::InvalidValue`] if `data` is empty
    /// - [`Error::OutOfRange`] if `data` does not fit into the rest of the region
    /// - [`Error::Truncated`] / [`Error::Io`] if the store fails
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        let sink = self.backing()?;
        bounds::check(sink.extent(), data.len())?;
        Self::transfer(sink, data)
    }

    /// Copies `data` without validating the access first.
    ///
    /// # Panics
    /// Panics if `data` runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if the writer is unbound, and the store failures of
    /// [`Writer::write`] in file mode.
    pub fn write_unchecked(&mut self, data: &[u8]) -> Result<()> {
        let sink = self.backing()?;
        Self::transfer(sink, data)
    }

    /// Like [`Writer::write`], emitting the bytes of `data` in reverse order.
    ///
    /// Spans longer than 16 bytes are reversed in a heap copy.
    ///
    /// # Errors
    /// See [`Writer::write`].
    pub fn write_reversed(&mut self, data: &[u8]) -> Result<()> {
        with_reversed(data, |bytes| self.write(bytes))
    }

    /// Like [`Writer::write_unchecked`], emitting the bytes of `data` in reverse order.
    ///
    /// # Panics
    /// Panics if `data` runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Writer::write_unchecked`].
    pub fn write_reversed_unchecked(&mut self, data: &[u8]) -> Result<()> {
        with_reversed(data, |bytes| self.write_unchecked(bytes))
    }

    /// Writes `value` in the given byte order.
    ///
    /// # Errors
    /// See [`Writer::write`].
    pub fn write_value<T: Primitive>(&mut self, value: T, endian: Endian) -> Result<()> {
        self.write(encode(value, endian).as_ref())
    }

    /// Writes `value` in the given byte order without validating the access first.
    ///
    /// # Panics
    /// Panics if the value runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Writer::write_unchecked`].
    pub fn write_value_unchecked<T: Primitive>(&mut self, value: T, endian: Endian) -> Result<()> {
        self.write_unchecked(encode(value, endian).as_ref())
    }

    /// Writes `value` in host byte order.
    ///
    /// # Errors
    /// See [`Writer::write`].
    pub fn write_ne<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_value(value, Endian::Native)
    }

    /// Writes `value` little-endian.
    ///
    /// # Errors
    /// See [`Writer::write`].
    pub fn write_le<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_value(value, Endian::Little)
    }

    /// Writes `value` big-endian.
    ///
    /// # Errors
    /// See [`Writer::write`].
    pub fn write_be<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_value(value, Endian::Big)
    }

    /// Quantizes `value` into a `T` and writes it.
    ///
    /// Nothing is written if `value` lies outside the domain of `T`.
    ///
    /// # Errors
    /// - [`Error::InvalidHandle`] if the writer is unbound
    /// - [`Error::InvalidValue`] if `value` is outside `[T::DOMAIN_MIN, T::DOMAIN_MAX]` or NaN
    /// - otherwise the errors of [`Writer::write`]
    pub fn write_normalized<T: Normalized>(&mut self, value: T::Float, endian: Endian) -> Result<()> {
        self.backing()?;
        let quantized = T::normalize(value)?;
        self.write_value(quantized, endian)
    }

    /// Quantizes `value` into a `T` without a domain check and writes it unchecked.
    /// Out-of-domain values saturate at the integer range.
    ///
    /// # Panics
    /// Panics if the value runs past the end of a buffer-mode region.
    ///
    /// # Errors
    /// See [`Writer::write_unchecked`].
    pub fn write_normalized_unchecked<T: Normalized>(
        &mut self,
        value: T::Float,
        endian: Endian,
    ) -> Result<()> {
        self.write_value_unchecked(T::quantize(value), endian)
    }

    /// Forwards a flush to the store. Buffer-mode writers have nothing to flush.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if unbound and [`Error::Io`] if the store fails.
    pub fn flush(&mut self) -> Result<()> {
        match self.backing()? {
            Backing::Buffer(_) => Ok(()),
            Backing::File(file) => Ok(file.flush()?),
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

    write_accessors! {
        u8 => write_u8, write_u8_le, write_u8_be,
              write_u8_unchecked, write_u8_le_unchecked, write_u8_be_unchecked;
        i8 => write_i8, write_i8_le, write_i8_be,
              write_i8_unchecked, write_i8_le_unchecked, write_i8_be_unchecked;
        u16 => write_u16, write_u16_le, write_u16_be,
               write_u16_unchecked, write_u16_le_unchecked, write_u16_be_unchecked;
        i16 => write_i16, write_i16_le, write_i16_be,
               write_i16_unchecked, write_i16_le_unchecked, write_i16_be_unchecked;
        u32 => write_u32, write_u32_le, write_u32_be,
               write_u32_unchecked, write_u32_le_unchecked, write_u32_be_unchecked;
        i32 => write_i32, write_i32_le, write_i32_be,
               write_i32_unchecked, write_i32_le_unchecked, write_i32_be_unchecked;
        u64 => write_u64, write_u64_le, write_u64_be,
               write_u64_unchecked, write_u64_le_unchecked, write_u64_be_unchecked;
        i64 => write_i64, write_i64_le, write_i64_be,
               write_i64_unchecked, write_i64_le_unchecked, write_i64_be_unchecked;
        f32 => write_f32, write_f32_le, write_f32_be,
               write_f32_unchecked, write_f32_le_unchecked, write_f32_be_unchecked;
        f64 => write_f64, write_f64_le, write_f64_be,
               write_f64_unchecked, write_f64_le_unchecked, write_f64_be_unchecked;
    }

    write_normalized_accessors! {
        u8 as f32 => write_nu8, write_nu8_le, write_nu8_be,
                     write_nu8_unchecked, write_nu8_le_unchecked, write_nu8_be_unchecked;
        i8 as f32 => write_ni8, write_ni8_le, write_ni8_be,
                     write_ni8_unchecked, write_ni8_le_unchecked, write_ni8_be_unchecked;
        u16 as f32 => write_nu16, write_nu16_le, write_nu16_be,
                      write_nu16_unchecked, write_nu16_le_unchecked, write_nu16_be_unchecked;
        i16 as f32 => write_ni16, write_ni16_le, write_ni16_be,
                      write_ni16_unchecked, write_ni16_le_unchecked, write_ni16_be_unchecked;
        u32 as f64 => write_nu32, write_nu32_le, write_nu32_be,
                      write_nu32_unchecked, write_nu32_le_unchecked, write_nu32_be_unchecked;
        i32 as f64 => write_ni32, write_ni32_le, write_ni32_be,
                      write_ni32_unchecked, write_ni32_le_unchecked, write_ni32_be_unchecked;
        u64 as f64 => write_nu64, write_nu64_le, write_nu64_be,
                      write_nu64_unchecked, write_nu64_le_unchecked, write_nu64_be_unchecked;
        i64 as f64 => write_ni64, write_ni64_le, write_ni64_be,
                      write_ni64_unchecked, write_ni64_le_unchecked, write_ni64_be_unchecked;
    }
}

/// Spans up to this length are reversed in a stack array; longer ones go through a `Vec`.
const REVERSE_SCRATCH: usize = 16;

/// Hands a byte-reversed copy of `data` to `emit`.
fn with_reversed<R>(data: &[u8], emit: impl FnOnce(&[u8]) -> R) -> R {
    if data.len() <= REVERSE_SCRATCH {
        let mut scratch = [0u8; REVERSE_SCRATCH];
        let bytes = &mut scratch[..data.len()];
        bytes.copy_from_slice(data);
        reorder(bytes, true);
        emit(bytes)
    } else {
        let mut scratch = data.to_vec();
        reorder(&mut scratch, true);
        emit(&scratch)
    }
}
