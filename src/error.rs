use bitflags::bitflags;
use thiserror::Error;

macro_rules! out_of_range_error {
    // Access at a known position against a known capacity
    ($position:expr, $length:expr, $capacity:expr) => {
        crate::Error::OutOfRange {
            position: $position as u64,
            length: $length,
            capacity: Some($capacity as u64),
        }
    };

    // Capacity unknown (stream seeks, size arithmetic overflow)
    ($position:expr, $length:expr) => {
        crate::Error::OutOfRange {
            position: $position as u64,
            length: $length,
            capacity: None,
        }
    };
}

macro_rules! invalid_value_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidValue {
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidValue {
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is local and recoverable: a cursor that reported an error is left exactly where
/// it was before the failed call, so the caller can inspect the error and decide whether to
/// abort the surrounding parse or serialize operation.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidRegion`] - Empty buffer or zero page capacity
///
/// ## Access Errors
/// - [`Error::InvalidHandle`] - Cursor has no backend, or an arena span went stale
/// - [`Error::InvalidValue`] - Zero-length access or a normalized value outside its domain
/// - [`Error::OutOfRange`] - Access or seek would cross the backend capacity
/// - [`Error::Truncated`] - The external store moved fewer bytes than requested
///
/// ## I/O Errors
/// - [`Error::Io`] - Any other failure reported by the external store
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Error, Reader};
///
/// let data = [0u8; 4];
/// let mut reader = Reader::from_buffer(&data)?;
///
/// match reader.read_u64() {
///     Ok(value) => println!("read {value}"),
///     Err(Error::OutOfRange { position, length, .. }) => {
///         println!("{length} bytes at {position} do not fit");
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), bytecursor::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The cursor is not bound to a backend.
    ///
    /// Returned by every access on a cursor created through `Default` or after
    /// `release()`, and by the arena when a [`crate::Span`] outlived a `clear()`.
    #[error("No valid backend handle")]
    InvalidHandle,

    /// The backing region given at construction is unusable.
    ///
    /// Buffer cursors need a non-empty region, arenas a non-zero default page capacity.
    #[error("The backing region is empty")]
    InvalidRegion,

    /// An access or seek would cross the capacity of the backend.
    ///
    /// # Fields
    ///
    /// * `position` - Offset at which the access was attempted
    /// * `length` - Number of bytes requested (0 for seeks)
    /// * `capacity` - Backend capacity, if known
    #[error("Out of range access - {length} bytes at {position} (capacity {capacity:?})")]
    OutOfRange {
        /// Offset at which the access was attempted
        position: u64,
        /// Number of bytes requested
        length: usize,
        /// Capacity of the backend, `None` if it is not known up front
        capacity: Option<u64>,
    },

    /// The external store supplied fewer bytes than requested.
    ///
    /// This is the file-mode counterpart of [`Error::OutOfRange`], since the remaining
    /// size of a stream cannot be validated before the access.
    #[error("Truncated access - requested {requested} bytes, got {available}")]
    Truncated {
        /// Number of bytes the access asked for
        requested: usize,
        /// Number of bytes the store actually moved
        available: usize,
    },

    /// A value passed to an accessor is not acceptable.
    #[error("Invalid value - {message}")]
    InvalidValue {
        /// Description of the rejected value
        message: String,
    },

    /// Failure reported by the external store that is neither a short read nor a short write.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the [`ErrorFlags`] bit matching this error.
    #[must_use]
    pub fn flag(&self) -> ErrorFlags {
        match self {
            Error::InvalidHandle => ErrorFlags::INVALID_HANDLE,
            Error::InvalidRegion => ErrorFlags::INVALID_REGION,
            Error::OutOfRange { .. } => ErrorFlags::OUT_OF_RANGE,
            Error::Truncated { .. } => ErrorFlags::TRUNCATED,
            Error::InvalidValue { .. } => ErrorFlags::INVALID_VALUE,
            Error::Io(_) => ErrorFlags::IO,
        }
    }
}

bitflags! {
    /// Set of simultaneous error conditions.
    ///
    /// The checked accessors stop at the first violation, in the order handle, value, bounds.
    /// When a caller wants to know everything that is wrong with a prospective access, the
    /// cursors' `diagnose` methods report all conditions at once through this set.
    ///
    /// ```rust
    /// use bytecursor::{ErrorFlags, Reader};
    ///
    /// let reader = Reader::default();
    /// let flags = reader.diagnose(0);
    /// assert!(flags.contains(ErrorFlags::INVALID_HANDLE | ErrorFlags::INVALID_VALUE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ErrorFlags: u8 {
        /// See [`Error::InvalidHandle`]
        const INVALID_HANDLE = 0x01;
        /// See [`Error::InvalidRegion`]
        const INVALID_REGION = 0x02;
        /// See [`Error::OutOfRange`]
        const OUT_OF_RANGE = 0x04;
        /// See [`Error::Truncated`]
        const TRUNCATED = 0x08;
        /// See [`Error::InvalidValue`]
        const INVALID_VALUE = 0x10;
        /// See [`Error::Io`]
        const IO = 0x20;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_match_variants() {
        assert_eq!(Error::InvalidHandle.flag(), ErrorFlags::INVALID_HANDLE);
        assert_eq!(Error::InvalidRegion.flag(), ErrorFlags::INVALID_REGION);
        assert_eq!(out_of_range_error!(4, 8, 10).flag(), ErrorFlags::OUT_OF_RANGE);
        assert_eq!(
            Error::Truncated {
                requested: 4,
                available: 1
            }
            .flag(),
            ErrorFlags::TRUNCATED
        );
        assert_eq!(
            invalid_value_error!("value {} too large", 2.0).flag(),
            ErrorFlags::INVALID_VALUE
        );
    }

    #[test]
    fn out_of_range_macro() {
        match out_of_range_error!(1020usize, 8, 1024usize) {
            Error::OutOfRange {
                position,
                length,
                capacity,
            } => {
                assert_eq!(position, 1020);
                assert_eq!(length, 8);
                assert_eq!(capacity, Some(1024));
            }
            _ => panic!("Expected OutOfRange"),
        }

        assert!(matches!(
            out_of_range_error!(7u64, 0),
            Error::OutOfRange { capacity: None, .. }
        ));
    }

    #[test]
    fn display() {
        let error = invalid_value_error!("normalized value {} outside [0, 1]", 1.5);
        assert_eq!(
            error.to_string(),
            "Invalid value - normalized value 1.5 outside [0, 1]"
        );

        let error = Error::Truncated {
            requested: 8,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "Truncated access - requested 8 bytes, got 3"
        );
    }

    #[test]
    fn io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.flag(), ErrorFlags::IO);
    }
}
