//! External seekable store backend.
//!
//! File-mode cursors borrow an already opened store (a [`std::fs::File`], a
//! [`std::io::Cursor`], a `BufReader` around either, ...) and delegate the position to it.
//! Nothing is cached: the length of the store is probed on demand by seeking to its end and
//! back, so it is only valid until the store is modified by someone else.
//!
//! Every access moves the whole span in as few store calls as the store allows; byte order
//! reversal happens in the caller's scratch array before or after the transfer. If an access
//! fails half way, the store position is rewound to where the access started so that a
//! failed access never leaves the cursor partially advanced.

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use tracing::trace;

use crate::{Error, Result};

/// A readable, seekable byte store usable as a [`crate::Reader`] backend.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// A writable, seekable byte store usable as a [`crate::Writer`] backend.
pub trait WriteSeek: Write + Seek {}

impl<T: Write + Seek + ?Sized> WriteSeek for T {}

/// Reads exactly `out.len()` bytes from the store.
///
/// # Errors
/// Returns [`crate::Error::Truncated`] if the store ends early and [`crate::Error::Io`] for
/// any other store failure. In both cases the store position is restored.
pub fn read_full<S: Read + Seek + ?Sized>(stream: &mut S, out: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < out.len() {
        match stream.read(&mut out[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => {
                rewind(stream, filled)?;
                return Err(Error::Io(error));
            }
        }
    }

    if filled < out.len() {
        rewind(stream, filled)?;
        return Err(Error::Truncated {
            requested: out.len(),
            available: filled,
        });
    }

    Ok(())
}

/// Writes all of `data` to the store.
///
/// # Errors
/// Returns [`crate::Error::Truncated`] if the store stops accepting bytes and
/// [`crate::Error::Io`] for any other store failure. In both cases the store position is
/// restored; bytes that already reached the store are not taken back.
pub fn write_full<S: Write + Seek + ?Sized>(stream: &mut S, data: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < data.len() {
        match stream.write(&data[written..]) {
            Ok(0) => {
                rewind(stream, written)?;
                return Err(Error::Truncated {
                    requested: data.len(),
                    available: written,
                });
            }
            Ok(count) => written += count,
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => {
                rewind(stream, written)?;
                return Err(Error::Io(error));
            }
        }
    }

    Ok(())
}

/// Moves the store to the absolute offset `position`.
///
/// # Errors
/// Returns [`crate::Error::OutOfRange`] if the store rejects the offset.
pub fn seek<S: Seek + ?Sized>(stream: &mut S, position: usize) -> Result<()> {
    let target = position as u64;
    match stream.seek(SeekFrom::Start(target)) {
        Ok(_) => Ok(()),
        Err(_) => Err(out_of_range_error!(target, 0)),
    }
}

/// Current offset of the store.
///
/// # Errors
/// Returns [`crate::Error::Io`] if the store cannot report its position and
/// [`crate::Error::OutOfRange`] if it does not fit into `usize`.
pub fn tell<S: Seek + ?Sized>(stream: &mut S) -> Result<usize> {
    let position = stream.stream_position()?;
    usize::try_from(position).map_err(|_| out_of_range_error!(position, 0))
}

/// Total length of the store.
///
/// Saves the current offset, seeks to the end and restores the offset: three store calls.
///
/// # Errors
/// Returns [`crate::Error::Io`] if any of the seeks fail.
pub fn len<S: Seek + ?Sized>(stream: &mut S) -> Result<usize> {
    let saved = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(saved))?;

    usize::try_from(end).map_err(|_| out_of_range_error!(end, 0))
}

/// Moves the store back by `moved` bytes after a failed access.
fn rewind<S: Seek + ?Sized>(stream: &mut S, moved: usize) -> Result<()> {
    if moved == 0 {
        return Ok(());
    }

    trace!(moved, "rewinding store after failed access");
    let offset = i64::try_from(moved).map_err(|_| out_of_range_error!(moved, 0))?;
    stream.seek(SeekFrom::Current(-offset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Store that hands out data in small chunks and fails once it runs dry.
    struct Flaky {
        inner: Cursor<Vec<u8>>,
        chunk: usize,
        fail_after: u64,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.inner.position() >= self.fail_after {
                return Err(io::Error::other("device gone"));
            }
            let len = buf.len().min(self.chunk);
            self.inner.read(&mut buf[..len])
        }
    }

    impl Seek for Flaky {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    #[test]
    fn read_full_exact() {
        let mut stream = Cursor::new(vec![1u8, 2, 3, 4, 5]);
        let mut out = [0u8; 4];
        read_full(&mut stream, &mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(tell(&mut stream).unwrap(), 4);
    }

    #[test]
    fn read_full_truncated_rewinds() {
        let mut stream = Cursor::new(vec![1u8, 2, 3]);
        stream.set_position(1);
        let mut out = [0u8; 4];
        let result = read_full(&mut stream, &mut out);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                requested: 4,
                available: 2
            })
        ));
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn read_full_assembles_chunks() {
        let mut stream = Flaky {
            inner: Cursor::new((0u8..16).collect()),
            chunk: 3,
            fail_after: u64::MAX,
        };
        let mut out = [0u8; 8];
        read_full(&mut stream, &mut out).unwrap();
        assert_eq!(out, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn read_full_io_error_rewinds() {
        let mut stream = Flaky {
            inner: Cursor::new((0u8..16).collect()),
            chunk: 2,
            fail_after: 4,
        };
        let mut out = [0u8; 8];
        let result = read_full(&mut stream, &mut out);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(stream.inner.position(), 0);
    }

    #[test]
    fn write_full_into_fixed_store() {
        let mut backing = [0u8; 6];
        let mut stream = Cursor::new(&mut backing[..]);
        write_full(&mut stream, &[1, 2, 3, 4]).unwrap();

        let result = write_full(&mut stream, &[5, 6, 7, 8]);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                requested: 4,
                available: 2
            })
        ));
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn length_probe_restores_position() {
        let mut stream = Cursor::new(vec![0u8; 100]);
        stream.set_position(42);
        assert_eq!(len(&mut stream).unwrap(), 100);
        assert_eq!(stream.position(), 42);

        stream.set_position(100);
        assert_eq!(len(&mut stream).unwrap(), 100);
        assert_eq!(stream.position(), 100);
    }

    #[test]
    fn seek_and_tell() {
        let mut stream = Cursor::new(vec![0u8; 10]);
        seek(&mut stream, 7).unwrap();
        assert_eq!(tell(&mut stream).unwrap(), 7);

        // Seeking past the end is legal for stores, the next read reports truncation
        seek(&mut stream, 20).unwrap();
        let mut out = [0u8; 1];
        assert!(matches!(
            read_full(&mut stream, &mut out),
            Err(Error::Truncated { available: 0, .. })
        ));
    }

    #[test]
    fn works_through_trait_objects() {
        let mut cursor = Cursor::new(vec![9u8, 8]);
        let stream: &mut dyn ReadSeek = &mut cursor;
        let mut out = [0u8; 2];
        read_full(stream, &mut out).unwrap();
        assert_eq!(out, [9, 8]);
    }
}
