//! Fixed-width value types that can be moved through a cursor.

/// Trait for the fixed-width numeric types a cursor can transcode.
///
/// Each implementation defines a `Bytes` associated type holding the in-memory
/// representation of the value (e.g. `[u8; 4]` for `u32`). Byte order is applied on top of
/// that representation by [`crate::io::encode`] and [`crate::io::decode`], so implementors
/// only deal with the native layout.
///
/// The trait is implemented for:
/// - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
/// - **Signed integers**: `i8`, `i16`, `i32`, `i64`
/// - **Floating point**: `f32`, `f64`
///
/// # Examples
///
/// ```rust
/// use bytecursor::io::Primitive;
///
/// assert_eq!(<u32 as Primitive>::SIZE, 4);
/// let bytes = Primitive::to_ne_bytes(7_u16);
/// assert_eq!(<u16 as Primitive>::from_ne_bytes(bytes), 7);
/// ```
pub trait Primitive: Copy + Sized {
    /// Byte array holding the in-memory representation of the value.
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Number of bytes a value occupies on the wire.
    const SIZE: usize;

    /// Returns the native-order representation of the value.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from its native-order representation.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty => $size:literal),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Bytes = [u8; $size];

                const SIZE: usize = $size;

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_of_bytes<T: Primitive>() -> usize {
        T::Bytes::default().as_ref().len()
    }

    #[test]
    fn sizes_match_layout() {
        assert_eq!(<u8 as Primitive>::SIZE, std::mem::size_of::<u8>());
        assert_eq!(<i16 as Primitive>::SIZE, std::mem::size_of::<i16>());
        assert_eq!(<u32 as Primitive>::SIZE, std::mem::size_of::<u32>());
        assert_eq!(<i64 as Primitive>::SIZE, std::mem::size_of::<i64>());
        assert_eq!(<f32 as Primitive>::SIZE, std::mem::size_of::<f32>());
        assert_eq!(<f64 as Primitive>::SIZE, std::mem::size_of::<f64>());

        assert_eq!(size_of_bytes::<u64>(), 8);
        assert_eq!(size_of_bytes::<i8>(), 1);
    }

    #[test]
    fn native_roundtrip_is_bit_exact() {
        let nan = f32::from_bits(0x7FC0_0001);
        let back = <f32 as Primitive>::from_ne_bytes(Primitive::to_ne_bytes(nan));
        assert_eq!(back.to_bits(), 0x7FC0_0001);

        let back = <i64 as Primitive>::from_ne_bytes(Primitive::to_ne_bytes(i64::MIN));
        assert_eq!(back, i64::MIN);
    }
}
