//! Stateless helpers used alongside the cursors.

mod bits;

pub use bits::{get_bits, get_bits32, with_bits, with_bits32};
