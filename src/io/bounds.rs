//! Pre-access validation shared by [`crate::Reader`] and [`crate::Writer`].
//!
//! The checker is a pure function of what the cursor knows about its backend: a buffer
//! knows both its position and its capacity, a stream knows neither without extra store
//! calls. Stream accesses are therefore only validated for their length and rely on the
//! backend to report [`crate::Error::Truncated`].

use crate::{ErrorFlags, Result};

/// What a backend can tell the checker about an upcoming access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Position and capacity are known up front (buffer mode).
    Known {
        /// Current cursor position
        position: usize,
        /// Total length of the region
        capacity: usize,
    },
    /// The backend validates the access itself (file mode).
    Deferred,
}

/// Validates an access of `length` bytes against `extent`.
///
/// Detection order is value first, bounds second; handle validity is established by the
/// caller when it produces the extent.
///
/// # Errors
/// Returns [`crate::Error::InvalidValue`] for a zero-length access and
/// [`crate::Error::OutOfRange`] if the access would cross the capacity or overflow.
pub fn check(extent: Extent, length: usize) -> Result<()> {
    if length == 0 {
        return Err(invalid_value_error!("zero-length access"));
    }

    if let Extent::Known { position, capacity } = extent {
        match position.checked_add(length) {
            Some(end) if end <= capacity => {}
            _ => return Err(out_of_range_error!(position, length, capacity)),
        }
    }

    Ok(())
}

/// Collects every condition that would make an access of `length` bytes fail.
///
/// `None` stands for a cursor without a backend.
#[must_use]
pub fn diagnose(extent: Option<Extent>, length: usize) -> ErrorFlags {
    let mut flags = ErrorFlags::empty();
    if extent.is_none() {
        flags |= ErrorFlags::INVALID_HANDLE;
    }

    if length == 0 {
        flags |= ErrorFlags::INVALID_VALUE;
    }

    if let Some(Extent::Known { position, capacity }) = extent {
        if position.checked_add(length).is_none_or(|end| end > capacity) {
            flags |= ErrorFlags::OUT_OF_RANGE;
        }
    }

    flags
}
