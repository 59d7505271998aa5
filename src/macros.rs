//! Generators for the per-width accessor surface of the cursors.
//!
//! Every named accessor is a one-line forward to the generic `read_value` /
//! `write_value` / `read_normalized` / `write_normalized` core, so the byte order
//! and safety handling lives in exactly one place per cursor.

/// Plain typed read accessors for [`crate::Reader`].
///
/// ```rust, ignore
/// read_accessors! {
///     u16 => read_u16, read_u16_le, read_u16_be,
///            read_u16_unchecked, read_u16_le_unchecked, read_u16_be_unchecked;
/// }
/// ```
macro_rules! read_accessors {
    ($($ty:ty => $ne:ident, $le:ident, $be:ident, $ne_u:ident, $le_u:ident, $be_u:ident;)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "` in native byte order.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $ne(&mut self) -> crate::Result<$ty> {
                self.read_value::<$ty>(crate::Endian::Native)
            }

            #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $le(&mut self) -> crate::Result<$ty> {
                self.read_value::<$ty>(crate::Endian::Little)
            }

            #[doc = concat!("Reads a big-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $be(&mut self) -> crate::Result<$ty> {
                self.read_value::<$ty>(crate::Endian::Big)
            }

            #[doc = concat!("Reads a `", stringify!($ty), "` in native byte order without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $ne_u(&mut self) -> crate::Result<$ty> {
                self.read_value_unchecked::<$ty>(crate::Endian::Native)
            }

            #[doc = concat!("Reads a little-endian `", stringify!($ty), "` without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $le_u(&mut self) -> crate::Result<$ty> {
                self.read_value_unchecked::<$ty>(crate::Endian::Little)
            }

            #[doc = concat!("Reads a big-endian `", stringify!($ty), "` without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $be_u(&mut self) -> crate::Result<$ty> {
                self.read_value_unchecked::<$ty>(crate::Endian::Big)
            }
        )*
    };
}

/// Normalized read accessors for [`crate::Reader`], decoding into `$float`.
macro_rules! read_normalized_accessors {
    ($($ty:ty as $float:ty => $ne:ident, $le:ident, $be:ident, $ne_u:ident, $le_u:ident, $be_u:ident;)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "` in native byte order and maps it onto its normalized range.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $ne(&mut self) -> crate::Result<$float> {
                self.read_normalized::<$ty>(crate::Endian::Native)
            }

            #[doc = concat!("Reads a little-endian `", stringify!($ty), "` and maps it onto its normalized range.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $le(&mut self) -> crate::Result<$float> {
                self.read_normalized::<$ty>(crate::Endian::Little)
            }

            #[doc = concat!("Reads a big-endian `", stringify!($ty), "` and maps it onto its normalized range.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $be(&mut self) -> crate::Result<$float> {
                self.read_normalized::<$ty>(crate::Endian::Big)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($ne), "`].")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $ne_u(&mut self) -> crate::Result<$float> {
                self.read_normalized_unchecked::<$ty>(crate::Endian::Native)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($le), "`].")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $le_u(&mut self) -> crate::Result<$float> {
                self.read_normalized_unchecked::<$ty>(crate::Endian::Little)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($be), "`].")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $be_u(&mut self) -> crate::Result<$float> {
                self.read_normalized_unchecked::<$ty>(crate::Endian::Big)
            }
        )*
    };
}

/// Plain typed write accessors for [`crate::Writer`].
macro_rules! write_accessors {
    ($($ty:ty => $ne:ident, $le:ident, $be:ident, $ne_u:ident, $le_u:ident, $be_u:ident;)*) => {
        $(
            #[doc = concat!("Writes a `", stringify!($ty), "` in native byte order.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $ne(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value::<$ty>(value, crate::Endian::Native)
            }

            #[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $le(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value::<$ty>(value, crate::Endian::Little)
            }

            #[doc = concat!("Writes a big-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            /// Returns the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $be(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value::<$ty>(value, crate::Endian::Big)
            }

            #[doc = concat!("Writes a `", stringify!($ty), "` in native byte order without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $ne_u(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value_unchecked::<$ty>(value, crate::Endian::Native)
            }

            #[doc = concat!("Writes a little-endian `", stringify!($ty), "` without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $le_u(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value_unchecked::<$ty>(value, crate::Endian::Little)
            }

            #[doc = concat!("Writes a big-endian `", stringify!($ty), "` without pre-validation.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $be_u(&mut self, value: $ty) -> crate::Result<()> {
                self.write_value_unchecked::<$ty>(value, crate::Endian::Big)
            }
        )*
    };
}

/// Normalized write accessors for [`crate::Writer`], quantizing from `$float`.
macro_rules! write_normalized_accessors {
    ($($ty:ty as $float:ty => $ne:ident, $le:ident, $be:ident, $ne_u:ident, $le_u:ident, $be_u:ident;)*) => {
        $(
            #[doc = concat!("Quantizes `value` into a `", stringify!($ty), "` and writes it in native byte order.")]
            ///
            /// # Errors
            /// Returns [`crate::Error::InvalidValue`] if `value` is outside its domain, otherwise
            /// the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $ne(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized::<$ty>(value, crate::Endian::Native)
            }

            #[doc = concat!("Quantizes `value` into a `", stringify!($ty), "` and writes it little-endian.")]
            ///
            /// # Errors
            /// Returns [`crate::Error::InvalidValue`] if `value` is outside its domain, otherwise
            /// the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $le(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized::<$ty>(value, crate::Endian::Little)
            }

            #[doc = concat!("Quantizes `value` into a `", stringify!($ty), "` and writes it big-endian.")]
            ///
            /// # Errors
            /// Returns [`crate::Error::InvalidValue`] if `value` is outside its domain, otherwise
            /// the first violation found by the bounds checker, or the backend failure.
            #[inline]
            pub fn $be(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized::<$ty>(value, crate::Endian::Big)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($ne), "`]; out-of-domain values saturate.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $ne_u(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized_unchecked::<$ty>(value, crate::Endian::Native)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($le), "`]; out-of-domain values saturate.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $le_u(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized_unchecked::<$ty>(value, crate::Endian::Little)
            }

            #[doc = concat!("Unchecked form of [`Self::", stringify!($be), "`]; out-of-domain values saturate.")]
            ///
            /// # Errors
            /// Returns backend failures only.
            #[inline]
            pub fn $be_u(&mut self, value: $float) -> crate::Result<()> {
                self.write_normalized_unchecked::<$ty>(value, crate::Endian::Big)
            }
        )*
    };
}
