//! Heuristics that turn [`crate::RasterOptions`] into concrete traversal parameters.
//!
//! Two choices are made when a rasterizer is configured:
//!
//! - **Swizzle size**: grows with the *logical* problem so that small problems are not
//!   fragmented into mostly-padding swizzle strips.
//! - **Raster order**: chosen from the *padded* shape. The shorter padded axis becomes
//!   major, so a swizzle strip spans the longer one.
//!
//! The two heuristics intentionally look at different shapes.

use crate::{ProblemShape, RasterOrder, RasterOrderOption};
use tile_raster_common::{effective_swizzle_cap, MAX_LOG_SWIZZLE_SIZE};

/// Minimum of `min(tiles_m, tiles_n)` required to use each swizzle size, indexed by log2.
static MIN_DIM_FOR_LOG_SWIZZLE: [u32; (MAX_LOG_SWIZZLE_SIZE + 1) as usize] = [0, 2, 3, 6];

/// Selects `log2(swizzle_size)` for a logical problem and a requested maximum swizzle size.
///
/// The result is the largest `log` in `0..=3` such that `2^log` does not exceed the
/// effective cap (see [`effective_swizzle_cap`]) and `min(tiles_m, tiles_n)` reaches the
/// threshold for that size (2 for size 2, 3 for size 4, 6 for size 8).
///
/// # Examples
///
/// ```
/// use tile_raster::{select_log_swizzle_size, ProblemShape};
///
/// // 127x93 tiles with a cap of 8 gets the full swizzle.
/// assert_eq!(select_log_swizzle_size(&ProblemShape::new(127, 93, 2), 8), 3);
/// // Cap of 1 always means no swizzle.
/// assert_eq!(select_log_swizzle_size(&ProblemShape::new(4, 4, 1), 1), 0);
/// ```
pub fn select_log_swizzle_size(problem: &ProblemShape, max_swizzle_size: u32) -> u32 {
    let cap = effective_swizzle_cap(max_swizzle_size);
    let min_dim = problem.tiles_m.min(problem.tiles_n);

    (1..=MAX_LOG_SWIZZLE_SIZE)
        .rev()
        .find(|&log| cap >= (1 << log) && min_dim >= MIN_DIM_FOR_LOG_SWIZZLE[log as usize])
        .unwrap_or(0)
}

/// Resolves a [`RasterOrderOption`] against the padded problem shape.
///
/// Under [`RasterOrderOption::Heuristic`], the order is [`RasterOrder::AlongM`] only when
/// the padded problem has strictly more N tiles than M tiles; ties resolve to
/// [`RasterOrder::AlongN`]. Explicit options are passed through.
pub fn select_raster_order(padded: &ProblemShape, option: RasterOrderOption) -> RasterOrder {
    match option {
        RasterOrderOption::AlongM => RasterOrder::AlongM,
        RasterOrderOption::AlongN => RasterOrder::AlongN,
        RasterOrderOption::Heuristic => {
            if padded.tiles_n > padded.tiles_m {
                RasterOrder::AlongM
            } else {
                RasterOrder::AlongN
            }
        }
    }
}
