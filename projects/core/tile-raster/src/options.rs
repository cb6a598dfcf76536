//! Raster order and swizzle options.

use derive_enum_all_values::AllValues;
use tile_raster_common::MAX_SWIZZLE_SIZE;

/// Requested raster order.
///
/// [`RasterOrderOption::Heuristic`] lets the rasterizer pick an order from the padded
/// problem shape; the other two variants force one.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues, Default)]
pub enum RasterOrderOption {
    /// Traverse along M when the padded problem is wider (N) than it is tall (M),
    /// otherwise along N.
    #[default]
    Heuristic = 0,
    /// Force [`RasterOrder::AlongM`].
    AlongM = 1,
    /// Force [`RasterOrder::AlongN`].
    AlongN = 2,
}

/// Resolved raster order: which axis is major.
///
/// The major axis is the one stepped once per `swizzle_size` clusters of the minor axis.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues, Default)]
pub enum RasterOrder {
    /// M is major, N is minor.
    AlongM = 0,
    /// N is major, M is minor.
    #[default]
    AlongN = 1,
}

impl RasterOrder {
    /// Splits `(m, n)` into `(major, minor)` for this order.
    #[inline(always)]
    pub const fn to_major_minor(self, m: u32, n: u32) -> (u32, u32) {
        match self {
            RasterOrder::AlongN => (n, m),
            RasterOrder::AlongM => (m, n),
        }
    }

    /// Joins `(major, minor)` back into `(m, n)` for this order.
    #[inline(always)]
    pub const fn from_major_minor(self, major: u32, minor: u32) -> (u32, u32) {
        match self {
            RasterOrder::AlongN => (minor, major),
            RasterOrder::AlongM => (major, minor),
        }
    }
}

/// User supplied knobs for the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterOptions {
    /// Upper bound on the swizzle size. Rounded down to one of `{1, 2, 4, 8}`.
    pub max_swizzle_size: u32,
    /// Requested raster order.
    pub raster_order: RasterOrderOption,
}

impl RasterOptions {
    /// Creates a new set of options.
    pub const fn new(max_swizzle_size: u32, raster_order: RasterOrderOption) -> Self {
        Self {
            max_swizzle_size,
            raster_order,
        }
    }

    /// Returns an iterator over every distinct combination of options.
    ///
    /// Only effective swizzle caps (`1, 2, 4, 8`) are produced, each paired with every
    /// [`RasterOrderOption`], giving 12 combinations in total.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::RasterOptions;
    ///
    /// assert_eq!(RasterOptions::all_combinations().count(), 12);
    /// ```
    pub fn all_combinations() -> impl Iterator<Item = RasterOptions> {
        RasterOrderOption::all_values()
            .iter()
            .flat_map(|order| {
                let mut cap = 1;
                core::iter::from_fn(move || {
                    if cap > MAX_SWIZZLE_SIZE {
                        return None;
                    }
                    let options = RasterOptions::new(cap, *order);
                    cap <<= 1;
                    Some(options)
                })
            })
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            max_swizzle_size: 1,
            raster_order: RasterOrderOption::Heuristic,
        }
    }
}
