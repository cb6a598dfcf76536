//! Errors reported by the checked rasterizer surface.
//!
//! The total functions [`crate::Rasterizer::decode`] and [`crate::Rasterizer::encode`] never
//! fail; they report failure in-band. [`crate::Rasterizer::try_decode`] and
//! [`crate::Rasterizer::try_encode`] report the same conditions as a [`RasterError`].

use thiserror::Error;

/// Why a decode or encode could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    /// The configuration has no usable tiles (for example a zero-sized problem).
    #[error("Rasterizer extent is invalid: the configuration has no schedulable tiles")]
    InvalidExtent,

    /// A linear index is outside the physical index space.
    #[error("Linear index {index} is out of range (total tiles: {total_tiles})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: u64,
        /// Number of physical tiles.
        total_tiles: u64,
    },

    /// A tile coordinate is outside the requested (logical or padded) bound.
    #[error("Tile ({m}, {n}) is out of range (bound: {bound_m}x{bound_n})")]
    CoordinateOutOfRange {
        /// Requested M coordinate.
        m: u32,
        /// Requested N coordinate.
        n: u32,
        /// Exclusive M bound that was checked.
        bound_m: u32,
        /// Exclusive N bound that was checked.
        bound_n: u32,
    },

    /// A batch index is outside the logical problem.
    #[error("Batch {l} is out of range (batches: {batches})")]
    BatchOutOfRange {
        /// Requested batch.
        l: u32,
        /// Number of logical batches.
        batches: u32,
    },
}
