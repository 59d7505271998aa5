//! Cursor backends, byte order and typed value transcoding.
//!
//! This module holds everything below the public [`crate::Reader`] and [`crate::Writer`]
//! cursors: the two storage backends, the bounds checker both cursors share, the byte-order
//! transcoder and the traits describing which values can be moved.
//!
//! # Architecture
//!
//! - **Bounds checking** - [`bounds::check`] decides whether an access is legal before any
//!   state is touched; [`bounds::diagnose`] reports every violation at once
//! - **Transcoding** - [`encode`] / [`decode`] apply an [`Endian`] to the native byte array of a
//!   [`Primitive`], reversing it through the single [`reorder`] routine
//! - **Quantization** - [`Normalized`] maps `[0, 1]` / `[-1, 1]` floats onto integer ranges
//! - **Backends** - [`Backing`] is the closed sum of a [`Buffer`] (borrowed in-memory region)
//!   and a borrowed seekable store ([`ReadSeek`] / [`WriteSeek`])
//! - **Mapped files** - [`MappedFile`] provides a read-only region backed by a memory map
//!
//! # Backends
//!
//! | | Buffer | File |
//! |---|---|---|
//! | capacity | region length, fixed | probed on demand (3 store calls) |
//! | position | kept by the cursor | kept by the store |
//! | pre-validation | full bounds check | length only, store reports truncation |
//!
//! # Thread Safety
//!
//! Cursors mutably borrow their backend for their whole lifetime, so the compiler enforces
//! exclusive access. Nothing in here locks; sharing a store between threads requires
//! external serialization.

pub mod bounds;

mod buffer;
mod mapped;
mod normal;
mod order;
mod primitive;
mod reader;
mod stream;
mod writer;

use std::{fmt, io::Seek};

use strum::{Display, EnumIter};

pub use buffer::Buffer;
pub use mapped::MappedFile;
pub use normal::Normalized;
pub use order::{decode, encode, reorder, Endian};
pub use primitive::Primitive;
pub use reader::{Reader, Source};
pub use stream::{ReadSeek, WriteSeek};
pub use writer::{Sink, Writer};

pub(crate) use stream::{read_full, write_full};

use bounds::Extent;
use crate::Result;

/// Storage medium of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Mode {
    /// Borrowed in-memory region with a cursor-owned position.
    #[strum(serialize = "buffer")]
    Buffer,
    /// Borrowed external seekable store that owns its position.
    #[strum(serialize = "file")]
    File,
}

/// The backend of a cursor: exactly one of a borrowed region or a borrowed store.
///
/// `B` is the region type (`&[u8]` or `&mut [u8]`), `S` the store trait object
/// ([`ReadSeek`] or [`WriteSeek`]). The readers and writers name their concrete
/// instantiations [`crate::Source`] and [`crate::Sink`].
pub enum Backing<'a, B, S: ?Sized + 'a> {
    /// In-memory region.
    Buffer(Buffer<B>),
    /// External seekable store.
    File(&'a mut S),
}

impl<'a, B: AsRef<[u8]>, S: Seek + ?Sized + 'a> Backing<'a, B, S> {
    /// Which storage medium this is.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Backing::Buffer(_) => Mode::Buffer,
            Backing::File(_) => Mode::File,
        }
    }

    /// What the bounds checker can know about the next access.
    #[must_use]
    pub fn extent(&self) -> Extent {
        match self {
            Backing::Buffer(buffer) => buffer.extent(),
            Backing::File(_) => Extent::Deferred,
        }
    }

    /// Moves to the absolute `position`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfRange`] if a buffer position is not inside the region or
    /// the store rejects the offset.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        match self {
            Backing::Buffer(buffer) => buffer.seek(position),
            Backing::File(file) => stream::seek(&mut **file, position),
        }
    }

    /// Current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if the store cannot report its offset.
    pub fn tell(&mut self) -> Result<usize> {
        match self {
            Backing::Buffer(buffer) => Ok(buffer.tell()),
            Backing::File(file) => stream::tell(&mut **file),
        }
    }

    /// Total length: the fixed region capacity, or the probed store length.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if probing the store fails.
    pub fn len(&mut self) -> Result<usize> {
        match self {
            Backing::Buffer(buffer) => Ok(buffer.len()),
            Backing::File(file) => stream::len(&mut **file),
        }
    }

    /// Bytes between the current position and the end.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if probing the store fails.
    pub fn remaining(&mut self) -> Result<usize> {
        match self {
            Backing::Buffer(buffer) => Ok(buffer.remaining()),
            Backing::File(file) => {
                let position = stream::tell(&mut **file)?;
                let length = stream::len(&mut **file)?;
                Ok(length.saturating_sub(position))
            }
        }
    }

    /// Returns to a previously observed position.
    pub(crate) fn restore(&mut self, position: usize) -> Result<()> {
        match self {
            Backing::Buffer(buffer) => {
                buffer.restore(position);
                Ok(())
            }
            Backing::File(file) => stream::seek(&mut **file, position),
        }
    }
}

impl<B: fmt::Debug, S: ?Sized> fmt::Debug for Backing<'_, B, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::Buffer(buffer) => f.debug_tuple("Buffer").field(buffer).finish(),
            Backing::File(_) => f.write_str("File(..)"),
        }
    }
}
