//! # bytecursor Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! of the bytecursor library. Import it to get the cursors, their error types and the
//! transcoding traits in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bytecursor operations
pub use crate::Error;

/// Bit set of simultaneous error conditions
pub use crate::ErrorFlags;

/// The result type used throughout bytecursor
pub use crate::Result;

// ================================================================================================
// Cursors
// ================================================================================================

/// The reading and writing cursors
pub use crate::{Reader, Writer};

/// Byte order selection and backend kind
pub use crate::{Endian, Mode};

/// Read-only memory-mapped input
pub use crate::MappedFile;

// ================================================================================================
// Transcoding Traits
// ================================================================================================

/// Values a cursor can move, and the subset that can carry normalized floats
pub use crate::io::{Normalized, Primitive};

/// Store bounds for file-mode cursors
pub use crate::io::{ReadSeek, WriteSeek};

// ================================================================================================
// Allocation
// ================================================================================================

/// The paged bump allocator and its handles
pub use crate::{PagedArena, Span};
