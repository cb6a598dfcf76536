//! Tile coordinate to linear index.
//!
//! The exact inverse of [`crate::Rasterizer::decode`]: the same fields are recombined in
//! reverse order, with the inverse cluster swizzle undoing the cluster swizzle.

use crate::cluster_swizzle::encode_cluster_id;
use crate::{RasterError, Rasterizer};
use likely_stable::unlikely;

/// Sentinel returned by [`Rasterizer::encode`] when a coordinate cannot be encoded.
///
/// No physical index can take this value: `total_tiles` never exceeds [`u64::MAX`], so the
/// largest valid index is `u64::MAX - 1`.
pub const INVALID_INDEX: u64 = u64::MAX;

impl Rasterizer {
    /// Encodes a tile coordinate into its linear physical index.
    ///
    /// The coordinate is checked against the logical problem, or against the padded problem
    /// when `allow_padded` is set (padding tiles can only be encoded that way). The batch is
    /// always checked against the logical batch count. Bounds are exclusive.
    ///
    /// Returns [`INVALID_INDEX`] when the extent is invalid or the coordinate is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, RasterOrderOption, Rasterizer, INVALID_INDEX};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(127, 93, 2),
    ///     ClusterShape::new(2, 2),
    ///     RasterOptions::new(8, RasterOrderOption::Heuristic),
    /// );
    ///
    /// let index = rasterizer.encode(100, 50, 1, false);
    /// let tile = rasterizer.decode(index);
    /// assert_eq!((tile.m, tile.n, tile.l), (100, 50, 1));
    ///
    /// // Padding tile (127 is past the logical M extent, but inside the padded one).
    /// assert_eq!(rasterizer.encode(127, 0, 0, false), INVALID_INDEX);
    /// assert_ne!(rasterizer.encode(127, 0, 0, true), INVALID_INDEX);
    /// ```
    #[inline]
    pub fn encode(&self, tile_m: u32, tile_n: u32, tile_l: u32, allow_padded: bool) -> u64 {
        let bound = if allow_padded {
            &self.padded
        } else {
            &self.problem
        };

        if unlikely(
            !self.has_valid_extent()
                || tile_l >= self.problem.batches
                || tile_m >= bound.tiles_m
                || tile_n >= bound.tiles_n,
        ) {
            return INVALID_INDEX;
        }

        let (major, minor) = self.raster_order.to_major_minor(tile_m, tile_n);
        let cluster_major = self.cluster_major as u64;
        let cluster_minor = self.cluster_minor as u64;

        let cluster_major_idx = major as u64 / cluster_major;
        let major_offset = major as u64 % cluster_major;
        let cluster_minor_idx = minor as u64 / cluster_minor;
        let minor_offset = minor as u64 % cluster_minor;

        let cluster_id_swizzled = encode_cluster_id(
            cluster_major_idx,
            cluster_minor_idx,
            self.log_swizzle_size,
            self.clusters_along_major as u64,
        );

        let blk_per_grid_dim = cluster_id_swizzled * cluster_major + major_offset;
        let idx_in_batch = blk_per_grid_dim * cluster_minor + minor_offset;
        tile_l as u64 * self.tiles_per_batch + idx_in_batch
    }

    /// Encodes a tile coordinate, reporting failure as a [`RasterError`].
    ///
    /// # Errors
    ///
    /// - [`RasterError::InvalidExtent`] if [`Rasterizer::has_valid_extent`] is `false`.
    /// - [`RasterError::BatchOutOfRange`] if `tile_l` is not below the logical batch count.
    /// - [`RasterError::CoordinateOutOfRange`] if `tile_m` or `tile_n` is not below the
    ///   logical extent (or the padded extent when `allow_padded` is set).
    pub fn try_encode(
        &self,
        tile_m: u32,
        tile_n: u32,
        tile_l: u32,
        allow_padded: bool,
    ) -> Result<u64, RasterError> {
        if !self.has_valid_extent() {
            return Err(RasterError::InvalidExtent);
        }
        if tile_l >= self.problem.batches {
            return Err(RasterError::BatchOutOfRange {
                l: tile_l,
                batches: self.problem.batches,
            });
        }

        let bound = if allow_padded {
            self.padded
        } else {
            self.problem
        };
        if tile_m >= bound.tiles_m || tile_n >= bound.tiles_n {
            return Err(RasterError::CoordinateOutOfRange {
                m: tile_m,
                n: tile_n,
                bound_m: bound.tiles_m,
                bound_n: bound.tiles_n,
            });
        }

        Ok(self.encode(tile_m, tile_n, tile_l, allow_padded))
    }
}
