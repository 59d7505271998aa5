//! Read-only memory-mapped file regions.
//!
//! A [`MappedFile`] maps a file on disk into the address space of the process and exposes it
//! as a byte region, so a buffer-mode [`crate::Reader`] can walk a file with the full bounds
//! checking of an in-memory region and without copying it first. Pages are loaded by the
//! operating system on first access.
//!
//! ```rust,no_run
//! use bytecursor::MappedFile;
//! use std::path::Path;
//!
//! let mapped = MappedFile::open(Path::new("capture.bin"))?;
//! let mut reader = mapped.reader()?;
//! let magic = reader.read_u32_be()?;
//! # Ok::<(), bytecursor::Error>(())
//! ```

use std::{fs, path::Path};

use memmap2::Mmap;
use tracing::debug;

use crate::{Error::InvalidRegion, Reader, Result};

/// A file on disk mapped read-only into memory.
#[derive(Debug)]
pub struct MappedFile {
    data: Mmap,
}

impl MappedFile {
    /// Opens and maps the file at `path`.
    ///
    /// ## Arguments
    /// * 'path' - The file to map
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if the file cannot be opened or mapped, and
    /// [`crate::Error::InvalidRegion`] if it is empty.
    pub fn open(path: &Path) -> Result<MappedFile> {
        let file = fs::File::open(path)?;
        let mapped = MappedFile::from_file(&file)?;
        debug!(path = %path.display(), len = mapped.len(), "mapped file");
        Ok(mapped)
    }

    /// Maps an already opened file.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if mapping fails and [`crate::Error::InvalidRegion`] if the
    /// file is empty.
    pub fn from_file(file: &fs::File) -> Result<MappedFile> {
        // The map stays valid only as long as nobody truncates the file underneath it
        let data = unsafe { Mmap::map(file)? };
        if data.is_empty() {
            return Err(InvalidRegion);
        }

        Ok(MappedFile { data })
    }

    /// The complete mapped region.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the mapped file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`, empty files are rejected when mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A buffer-mode reader over the whole mapped region.
    ///
    /// # Errors
    /// Never fails for a successfully mapped file; kept fallible to match
    /// [`crate::Reader::from_buffer`].
    pub fn reader(&self) -> Result<Reader<'_>> {
        Reader::from_buffer(self.data())
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}
