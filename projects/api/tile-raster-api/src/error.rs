//! Error types for the high-level rasterizer API.

use thiserror::Error;
use tile_raster::RasterError;

/// Errors that can occur when building or querying a rasterizer through this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileRasterError {
    /// The problem has no tiles along at least one axis.
    #[error("Problem is empty: {tiles_m}x{tiles_n} tiles in {batches} batches.")]
    EmptyProblem {
        /// Tiles along M.
        tiles_m: u32,
        /// Tiles along N.
        tiles_n: u32,
        /// Number of batches.
        batches: u32,
    },

    /// An error reported by the rasterizer itself.
    #[error(transparent)]
    Raster(#[from] RasterError),
}
