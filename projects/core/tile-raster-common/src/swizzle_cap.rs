//! Clamping of the requested maximum swizzle size.
//!
//! Swizzle sizes are limited to the power-of-two set `{1, 2, 4, 8}`. A requested cap is
//! rounded *down* to the nearest member of that set, so a request of 5 behaves as 4.

use crate::{floor_pow2, log2_pow2};

/// The largest swizzle size the rasterizer will ever select.
pub const MAX_SWIZZLE_SIZE: u32 = 8;

/// `log2` of [`MAX_SWIZZLE_SIZE`].
pub const MAX_LOG_SWIZZLE_SIZE: u32 = log2_pow2(MAX_SWIZZLE_SIZE);

/// Clamps a requested maximum swizzle size to the effective cap in `{1, 2, 4, 8}`.
///
/// Values are rounded down to a power of two and limited to [`MAX_SWIZZLE_SIZE`].
/// A request of 0 resolves to 1.
///
/// # Examples
///
/// ```
/// use tile_raster_common::effective_swizzle_cap;
///
/// assert_eq!(effective_swizzle_cap(0), 1);
/// assert_eq!(effective_swizzle_cap(3), 2);
/// assert_eq!(effective_swizzle_cap(5), 4);
/// assert_eq!(effective_swizzle_cap(100), 8);
/// ```
#[inline]
pub const fn effective_swizzle_cap(requested: u32) -> u32 {
    if requested >= MAX_SWIZZLE_SIZE {
        return MAX_SWIZZLE_SIZE;
    }
    if requested == 0 {
        return 1;
    }
    floor_pow2(requested)
}
