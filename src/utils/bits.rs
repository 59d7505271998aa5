//! Bit-field packing helpers.
//!
//! A field is `count` bits wide and starts `position` bits above the least significant
//! bit. Fields may span the whole word; bits that would land above the word are dropped.
//!
//! ```rust
//! use bytecursor::utils::{get_bits, with_bits};
//!
//! let word = with_bits(0, 4, 8, 0xAB);
//! assert_eq!(word, 0xAB0);
//! assert_eq!(get_bits(word, 4, 8), 0xAB);
//! ```

const fn mask64(count: u32) -> u64 {
    if count >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

const fn mask32(count: u32) -> u32 {
    if count >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << count) - 1
    }
}

const fn shl64(value: u64, position: u32) -> u64 {
    match value.checked_shl(position) {
        Some(shifted) => shifted,
        None => 0,
    }
}

const fn shl32(value: u32, position: u32) -> u32 {
    match value.checked_shl(position) {
        Some(shifted) => shifted,
        None => 0,
    }
}

/// Returns `target` with the field at `position..position + count` replaced by the low
/// `count` bits of `value`.
#[must_use]
pub const fn with_bits(target: u64, position: u32, count: u32, value: u64) -> u64 {
    let mask = mask64(count);
    (target & !shl64(mask, position)) | shl64(value & mask, position)
}

/// Extracts the field at `position..position + count` of `source`.
#[must_use]
pub const fn get_bits(source: u64, position: u32, count: u32) -> u64 {
    match source.checked_shr(position) {
        Some(shifted) => shifted & mask64(count),
        None => 0,
    }
}

/// 32-bit form of [`with_bits`].
#[must_use]
pub const fn with_bits32(target: u32, position: u32, count: u32, value: u32) -> u32 {
    let mask = mask32(count);
    (target & !shl32(mask, position)) | shl32(value & mask, position)
}

/// 32-bit form of [`get_bits`].
#[must_use]
pub const fn get_bits32(source: u32, position: u32, count: u32) -> u32 {
    match source.checked_shr(position) {
        Some(shifted) => shifted & mask32(count),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_field() {
        assert_eq!(with_bits(0xFFFF, 4, 4, 0x0), 0xFF0F);
        assert_eq!(with_bits(0, 60, 4, 0xF), 0xF000_0000_0000_0000);
        // value is masked to the field width
        assert_eq!(with_bits(0, 0, 4, 0xFF), 0xF);
        assert_eq!(with_bits32(0x1234_5678, 8, 8, 0xAB), 0x1234_AB78);
    }

    #[test]
    fn extract_field() {
        assert_eq!(get_bits(0xABCD, 4, 8), 0xBC);
        assert_eq!(get_bits32(0x8000_0000, 31, 1), 1);
        assert_eq!(get_bits32(0x1234_5678, 16, 16), 0x1234);
    }

    #[test]
    fn full_width_fields() {
        assert_eq!(with_bits(0x1234, 0, 64, u64::MAX), u64::MAX);
        assert_eq!(get_bits(u64::MAX, 0, 64), u64::MAX);
        assert_eq!(get_bits(0x0102_0304_0506_0708, 0, 64), 0x0102_0304_0506_0708);
        assert_eq!(with_bits32(0, 0, 32, 0xDEAD_BEEF), 0xDEAD_BEEF);
        assert_eq!(get_bits32(0xDEAD_BEEF, 0, 32), 0xDEAD_BEEF);
        // fields above bit 31
        assert_eq!(get_bits(1 << 40, 40, 1), 1);
        assert_eq!(with_bits(0, 32, 32, 0xFFFF_FFFF), 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn empty_and_out_of_word_fields() {
        assert_eq!(with_bits(0xFF, 3, 0, 0xFF), 0xFF);
        assert_eq!(get_bits(0xFF, 3, 0), 0);
        assert_eq!(get_bits(0xFF, 64, 8), 0);
        assert_eq!(with_bits32(7, 32, 4, 0xF), 7);
    }

    #[test]
    fn round_trip() {
        let mut word = 0u64;
        word = with_bits(word, 0, 5, 21);
        word = with_bits(word, 5, 11, 1500);
        word = with_bits(word, 16, 48, 0xDEAD_BEEF_CAFE);
        assert_eq!(get_bits(word, 0, 5), 21);
        assert_eq!(get_bits(word, 5, 11), 1500);
        assert_eq!(get_bits(word, 16, 48), 0xDEAD_BEEF_CAFE);
    }
}
