//! Alignment and power-of-two helpers.
//!
//! The rasterizer pads tile extents up to a multiple of `swizzle_size * cluster`, and
//! swizzle sizes are always powers of two. These helpers keep that arithmetic in one place.

/// Rounds `value` up to the next multiple of `alignment`, returning [`None`] on overflow.
///
/// An `alignment` of 0 returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use tile_raster_common::round_up_checked;
///
/// assert_eq!(round_up_checked(127, 16), Some(128));
/// assert_eq!(round_up_checked(96, 16), Some(96));
/// assert_eq!(round_up_checked(93, 16), Some(96));
/// assert_eq!(round_up_checked(u32::MAX, 8), None);
/// ```
#[inline]
pub const fn round_up_checked(value: u32, alignment: u32) -> Option<u32> {
    if alignment == 0 {
        return Some(value);
    }
    value.div_ceil(alignment).checked_mul(alignment)
}

/// Returns the largest power of two that is less than or equal to `value`.
///
/// Returns 0 when `value` is 0.
#[inline]
pub const fn floor_pow2(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }
    1 << (u32::BITS - 1 - value.leading_zeros())
}

/// Returns `log2(value)` for a power of two `value`.
///
/// The result is unspecified (but does not panic) if `value` is not a power of two,
/// in which case it is the log2 of [`floor_pow2`]`(value)`. `value` of 0 yields 0.
#[inline]
pub const fn log2_pow2(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }
    u32::BITS - 1 - value.leading_zeros()
}
