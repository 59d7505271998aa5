//! Byte-order selection and the single reversal routine behind every typed accessor.
//!
//! Values are always moved in their native in-memory representation. Cross-endian access
//! is implemented by reversing the fixed-size byte array of the value in a local scratch
//! copy, so both backends move the full span in one call no matter which order was
//! requested. Whether an [`Endian`] needs that reversal is resolved against the host byte
//! order, which is fixed at compile time.
//!
//! ```rust
//! use bytecursor::io::{decode, encode, Endian};
//!
//! let bytes = encode(0x1234_5678_u32, Endian::Big);
//! assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(decode::<u32>(bytes, Endian::Little), 0x7856_3412);
//! ```

use strum::{Display, EnumIter};

use super::primitive::Primitive;

/// Byte order selected for a typed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Endian {
    /// Host byte order; never reverses.
    #[strum(serialize = "native")]
    Native,
    /// Least significant byte first.
    #[strum(serialize = "little")]
    Little,
    /// Most significant byte first.
    #[strum(serialize = "big")]
    Big,
}

impl Endian {
    /// The concrete byte order of the host this crate was compiled for.
    pub const HOST: Endian = if cfg!(target_endian = "little") {
        Endian::Little
    } else {
        Endian::Big
    };

    /// Returns `true` if data in this byte order has to be reversed to match the host.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        match self {
            Endian::Native => false,
            Endian::Little => cfg!(target_endian = "big"),
            Endian::Big => cfg!(target_endian = "little"),
        }
    }
}

/// Reverses `bytes` in place when `reversed` is set.
///
/// This is the only place byte order is ever swapped; readers, writers and both backends
/// go through it.
#[inline]
pub fn reorder(bytes: &mut [u8], reversed: bool) {
    if reversed {
        bytes.reverse();
    }
}

/// Produces the on-wire bytes of `value` in the requested byte order.
#[inline]
#[must_use]
pub fn encode<T: Primitive>(value: T, endian: Endian) -> T::Bytes {
    let mut bytes = value.to_ne_bytes();
    reorder(bytes.as_mut(), endian.is_reversed());
    bytes
}

/// Rebuilds a value from its on-wire bytes in the requested byte order.
#[inline]
#[must_use]
pub fn decode<T: Primitive>(mut bytes: T::Bytes, endian: Endian) -> T {
    reorder(bytes.as_mut(), endian.is_reversed());
    T::from_ne_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn host_is_concrete() {
        assert_ne!(Endian::HOST, Endian::Native);
        assert!(!Endian::HOST.is_reversed());
        assert!(!Endian::Native.is_reversed());
    }

    #[test]
    fn exactly_one_foreign_order() {
        let reversed: Vec<Endian> = Endian::iter().filter(|e| e.is_reversed()).collect();
        assert_eq!(reversed.len(), 1);
        assert_ne!(reversed[0], Endian::HOST);
    }

    #[test]
    fn reorder_flag() {
        let mut bytes = [1u8, 2, 3, 4];
        reorder(&mut bytes, false);
        assert_eq!(bytes, [1, 2, 3, 4]);
        reorder(&mut bytes, true);
        assert_eq!(bytes, [4, 3, 2, 1]);
    }

    #[test]
    fn encode_explicit_orders() {
        assert_eq!(encode(0x0102_u16, Endian::Little), [0x02, 0x01]);
        assert_eq!(encode(0x0102_u16, Endian::Big), [0x01, 0x02]);
        assert_eq!(encode(0x0102_u16, Endian::Native), 0x0102_u16.to_ne_bytes());
        assert_eq!(encode(-2_i32, Endian::Big), [0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(
            encode(1.0_f64, Endian::Big),
            [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn decode_cross_order() {
        let bytes = encode(0x1234_5678_u32, Endian::Big);
        assert_eq!(decode::<u32>(bytes, Endian::Big), 0x1234_5678);
        assert_eq!(decode::<u32>(bytes, Endian::Little), 0x7856_3412);
    }

    #[test]
    fn single_byte_is_order_free() {
        for endian in Endian::iter() {
            assert_eq!(encode(0xAB_u8, endian), [0xAB]);
            assert_eq!(decode::<i8>([0xFF], endian), -1);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Endian::Native.to_string(), "native");
        assert_eq!(Endian::Little.to_string(), "little");
        assert_eq!(Endian::Big.to_string(), "big");
    }
}
