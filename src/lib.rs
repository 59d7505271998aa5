// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'io/mapped.rs' uses mmap to map a file into memory

//! # bytecursor
//!
//! Bounds-safe binary serialization cursors over in-memory regions and seekable stores.
//!
//! `bytecursor` moves fixed-width numbers between program memory and byte sequences. A
//! [`Reader`] or [`Writer`] wraps exactly one of two backends, a borrowed byte region or a
//! borrowed [`std::io::Read`]/[`std::io::Write`] + [`std::io::Seek`] store, and exposes one
//! interface over both: typed accessors for every integer width and both float widths, in
//! native, little or big byte order, plus quantized accessors for normalized floats.
//!
//! ## Features
//!
//! - **Two backends, one interface** - the same accessors work over a slice or a file
//! - **Explicit byte order** - `*_le`, `*_be` and native accessors, or [`Endian`] at runtime
//! - **Normalized values** - `[0, 1]` / `[-1, 1]` floats quantized onto integer ranges
//! - **Checked and unchecked** - every access has a validating form and an `*_unchecked` form
//! - **Paged arena** - [`PagedArena`] hands out regions cursors can be opened over
//! - **Memory-mapped input** - [`MappedFile`] reads files through the buffer backend
//!
//! ## Quick Start
//!
//! ```rust
//! use bytecursor::prelude::*;
//!
//! let mut data = [0u8; 8];
//! let mut writer = Writer::from_buffer(&mut data)?;
//! writer.write_u32_be(0x1234_5678)?;
//! writer.write_ni16_le(-0.5)?;
//!
//! let mut reader = Reader::from_buffer(&data)?;
//! assert_eq!(reader.read_u32_be()?, 0x1234_5678);
//! assert!((reader.read_ni16_le()? + 0.5).abs() < 1e-4);
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! ## File Backend
//!
//! ```rust
//! use bytecursor::{Reader, Writer};
//! use std::io::Cursor;
//!
//! let mut store = Cursor::new(Vec::new());
//! Writer::from_file(&mut store).write_f64_be(6.5)?;
//!
//! store.set_position(0);
//! let mut reader = Reader::from_file(&mut store);
//! assert_eq!(reader.read_f64_be()?, 6.5);
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! ## Safety Modes
//!
//! The checked accessors validate every access before touching any state and stop at the
//! first violation, in the order handle, value, bounds. A failed access never moves the
//! cursor. The `*_unchecked` accessors share the same core but skip pre-validation: misuse
//! panics on a buffer overrun or saturates an out-of-domain normalized value, and store
//! failures are still reported.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bytecursor::{Error, Reader};
//!
//! let data = vec![0u8; 1024];
//! let mut reader = Reader::from_buffer(&data)?;
//! reader.seek(1020)?;
//!
//! match reader.read_u64() {
//!     Err(Error::OutOfRange { position, .. }) => assert_eq!(position, 1020),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(reader.tell()?, 1020);
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level (arena growth, memory
//! maps, store rewinds). It never installs a subscriber.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! cargo +nightly fuzz run reader --release
//! ```
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use bytecursor::prelude::*;
///
/// let data = [0x01, 0x00];
/// let mut reader = Reader::from_buffer(&data)?;
/// assert_eq!(reader.read_value::<u16>(Endian::Little)?, 1);
/// # Ok::<(), bytecursor::Error>(())
/// ```
pub mod prelude;

/// Backends, bounds checking, byte order and value transcoding.
pub mod io;

/// The paged bump allocator.
pub mod arena;

/// Bit-field helpers.
pub mod utils;

/// `bytecursor` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Reader, Result};
///
/// fn magic(data: &[u8]) -> Result<u32> {
///     Reader::from_buffer(data)?.read_u32_be()
/// }
///
/// assert_eq!(magic(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap(), 0xCAFE_BABE);
/// assert!(magic(&[0xCA]).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `bytecursor` Error type
///
/// See [`Error`] for every variant. [`ErrorFlags`] mirrors the variants as a bit set
/// for the `diagnose` methods of the cursors.
pub use error::{Error, ErrorFlags};

/// The cursors and their backends.
pub use io::{Endian, MappedFile, Mode, Reader, Sink, Source, Writer};

/// The arena and its handles.
pub use arena::{PagedArena, Span, DEFAULT_PAGE_CAPACITY};
