//! Linear index to tile coordinate.
//!
//! A linear index over the padded space is split, from the least significant end, into:
//!
//! 1. the batch (`index / tiles_per_batch`),
//! 2. the offset inside a cluster along the minor axis,
//! 3. the offset inside a cluster along the major axis,
//! 4. the swizzled cluster id, which the cluster swizzle turns into a cluster position.
//!
//! All tiles of one cluster therefore occupy `cluster_m * cluster_n` consecutive indices.

use crate::cluster_swizzle::decode_cluster_id;
use crate::{RasterError, Rasterizer, TileCoord};
use likely_stable::unlikely;

impl Rasterizer {
    /// Decodes a linear physical index into a tile coordinate.
    ///
    /// Returns [`TileCoord::INVALID`] when the extent is invalid or
    /// `linear_index >= total_tiles`. Otherwise the result is `valid`, and `in_bounds` tells
    /// whether the tile is part of the logical problem or is a padding tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, Rasterizer};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(4, 4, 1),
    ///     ClusterShape::new(1, 1),
    ///     RasterOptions::default(),
    /// );
    ///
    /// let tile = rasterizer.decode(5);
    /// assert!(tile.valid && tile.in_bounds);
    /// assert_eq!((tile.m, tile.n, tile.l), (1, 1, 0));
    ///
    /// assert!(!rasterizer.decode(16).valid);
    /// ```
    #[inline]
    pub fn decode(&self, linear_index: u64) -> TileCoord {
        if unlikely(!self.has_valid_extent() || linear_index >= self.total_tiles) {
            return TileCoord::INVALID;
        }

        let l = linear_index / self.tiles_per_batch;
        let idx_in_batch = linear_index % self.tiles_per_batch;

        let cluster_minor = self.cluster_minor as u64;
        let cluster_major = self.cluster_major as u64;
        let minor_offset = idx_in_batch % cluster_minor;
        let blk_per_grid_dim = idx_in_batch / cluster_minor;

        let cluster_id_swizzled = blk_per_grid_dim / cluster_major;
        let major_offset = blk_per_grid_dim % cluster_major;

        let (cluster_major_idx, cluster_minor_idx) = decode_cluster_id(
            cluster_id_swizzled,
            self.log_swizzle_size,
            self.clusters_along_major as u64,
        );

        // Both are below the padded extent, which fits in u32.
        let major = (cluster_major_idx * cluster_major + major_offset) as u32;
        let minor = (cluster_minor_idx * cluster_minor + minor_offset) as u32;
        let (m, n) = self.raster_order.from_major_minor(major, minor);
        let l = l as u32;

        TileCoord {
            m,
            n,
            l,
            valid: true,
            in_bounds: self.problem.contains(m, n, l),
        }
    }

    /// Decodes a linear physical index, reporting failure as a [`RasterError`].
    ///
    /// Padding tiles are returned as `Ok` with `in_bounds == false`; they are not errors.
    ///
    /// # Errors
    ///
    /// - [`RasterError::InvalidExtent`] if [`Rasterizer::has_valid_extent`] is `false`.
    /// - [`RasterError::IndexOutOfRange`] if `linear_index >= total_tiles`.
    pub fn try_decode(&self, linear_index: u64) -> Result<TileCoord, RasterError> {
        if !self.has_valid_extent() {
            return Err(RasterError::InvalidExtent);
        }
        if linear_index >= self.total_tiles {
            return Err(RasterError::IndexOutOfRange {
                index: linear_index,
                total_tiles: self.total_tiles,
            });
        }
        Ok(self.decode(linear_index))
    }

    /// Decodes the consecutive indices `start, start + 1, ...` into `output`.
    ///
    /// Every slot of `output` is written; slots whose index lies outside `[0, total_tiles)`
    /// receive [`TileCoord::INVALID`]. Returns the number of valid entries, which always
    /// form a prefix of `output`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, Rasterizer, TileCoord};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(2, 2, 1),
    ///     ClusterShape::new(1, 1),
    ///     RasterOptions::default(),
    /// );
    ///
    /// let mut tiles = [TileCoord::INVALID; 8];
    /// assert_eq!(rasterizer.decode_into(2, &mut tiles), 2);
    /// assert!(tiles[1].valid);
    /// assert!(!tiles[2].valid);
    /// ```
    pub fn decode_into(&self, start: u64, output: &mut [TileCoord]) -> usize {
        let mut written = 0;
        for (offset, slot) in output.iter_mut().enumerate() {
            *slot = self.decode(start.saturating_add(offset as u64));
            written += slot.valid as usize;
        }
        written
    }
}
