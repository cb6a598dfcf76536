//! Rasterizer configuration.
//!
//! A [`Rasterizer`] is built once from a [`ProblemShape`], a [`ClusterShape`] and
//! [`RasterOptions`]. Everything the encode/decode pair needs is derived up front:
//!
//! 1. The cluster shape is normalized (zero extents become 1).
//! 2. The swizzle size is selected from the logical shape ([`select_log_swizzle_size`]).
//! 3. The logical shape is padded along M and N to a multiple of `swizzle_size * cluster`.
//! 4. The raster order is resolved from the padded shape ([`select_raster_order`]).
//! 5. Cluster extents and cluster counts are assigned to the major and minor axes.
//!
//! After construction the rasterizer is immutable; [`Rasterizer::configure`] replaces
//! every derived field at once.

use crate::selection::{select_log_swizzle_size, select_raster_order};
use crate::{ClusterShape, ProblemShape, RasterOptions, RasterOrder};
use tile_raster_common::round_up_checked;

/// Index-to-tile mapping for one problem configuration.
///
/// See the [crate documentation](crate) for an overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rasterizer {
    pub(crate) problem: ProblemShape,
    pub(crate) cluster: ClusterShape,
    pub(crate) options: RasterOptions,

    pub(crate) padded: ProblemShape,
    pub(crate) raster_order: RasterOrder,
    pub(crate) log_swizzle_size: u32,
    pub(crate) cluster_major: u32,
    pub(crate) cluster_minor: u32,
    pub(crate) clusters_along_major: u32,
    pub(crate) clusters_along_minor: u32,
    pub(crate) tiles_per_batch: u64,
    pub(crate) total_tiles: u64,
}

impl Rasterizer {
    /// Creates a rasterizer and derives all of its traversal parameters.
    ///
    /// Construction never fails. A configuration without usable tiles (for example a
    /// problem with zero tiles along an axis, or one whose padded size overflows) is still
    /// created, but [`Rasterizer::has_valid_extent`] returns `false` and every
    /// decode/encode against it reports failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, RasterOrder, RasterOrderOption, Rasterizer};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(127, 93, 2),
    ///     ClusterShape::new(2, 2),
    ///     RasterOptions::new(8, RasterOrderOption::Heuristic),
    /// );
    ///
    /// assert_eq!(rasterizer.swizzle_size(), 8);
    /// assert_eq!(rasterizer.padded_shape(), ProblemShape::new(128, 96, 2));
    /// assert_eq!(rasterizer.raster_order(), RasterOrder::AlongN);
    /// ```
    pub fn new(problem: ProblemShape, cluster: ClusterShape, options: RasterOptions) -> Self {
        let cluster = cluster.normalized();
        let log_swizzle_size = select_log_swizzle_size(&problem, options.max_swizzle_size);
        let padded = pad_problem(&problem, cluster, 1 << log_swizzle_size);
        let raster_order = select_raster_order(&padded, options.raster_order);

        let (cluster_major, cluster_minor) = raster_order.to_major_minor(cluster.m, cluster.n);
        let (padded_major, padded_minor) =
            raster_order.to_major_minor(padded.tiles_m, padded.tiles_n);

        let tiles_per_batch = padded.tiles_per_batch();
        let total_tiles = tiles_per_batch
            .checked_mul(padded.batches as u64)
            .unwrap_or(0);

        let rasterizer = Self {
            problem,
            cluster,
            options,
            padded,
            raster_order,
            log_swizzle_size,
            cluster_major,
            cluster_minor,
            clusters_along_major: padded_major / cluster_major,
            clusters_along_minor: padded_minor / cluster_minor,
            tiles_per_batch,
            total_tiles,
        };

        #[cfg(feature = "tracing")]
        rasterizer.trace_configuration();

        rasterizer
    }

    /// Rebuilds every derived field from a new configuration.
    ///
    /// This is equivalent to assigning [`Rasterizer::new`]; there is no partial update.
    pub fn configure(
        &mut self,
        problem: ProblemShape,
        cluster: ClusterShape,
        options: RasterOptions,
    ) {
        *self = Self::new(problem, cluster, options);
    }

    /// Whether the configuration has at least one physical tile to schedule.
    ///
    /// When this is `false`, [`Rasterizer::decode`] returns [`crate::TileCoord::INVALID`]
    /// and [`Rasterizer::encode`] returns [`crate::INVALID_INDEX`] for every input.
    #[inline]
    pub const fn has_valid_extent(&self) -> bool {
        self.cluster_major > 0
            && self.cluster_minor > 0
            && self.clusters_along_major > 0
            && self.padded.batches > 0
            && self.tiles_per_batch > 0
            && self.total_tiles > 0
    }

    /// The logical (unpadded) problem shape, as supplied.
    #[inline]
    pub const fn problem_shape(&self) -> ProblemShape {
        self.problem
    }

    /// The cluster shape after zero extents were replaced by 1.
    #[inline]
    pub const fn cluster_shape(&self) -> ClusterShape {
        self.cluster
    }

    /// The options this rasterizer was configured with.
    #[inline]
    pub const fn options(&self) -> RasterOptions {
        self.options
    }

    /// The padded (physical) problem shape.
    #[inline]
    pub const fn padded_shape(&self) -> ProblemShape {
        self.padded
    }

    /// The resolved raster order.
    #[inline]
    pub const fn raster_order(&self) -> RasterOrder {
        self.raster_order
    }

    /// The selected swizzle size, one of `1, 2, 4, 8`.
    #[inline]
    pub const fn swizzle_size(&self) -> u32 {
        1 << self.log_swizzle_size
    }

    /// `log2` of [`Rasterizer::swizzle_size`].
    #[inline]
    pub const fn log_swizzle_size(&self) -> u32 {
        self.log_swizzle_size
    }

    /// Cluster extent along the major axis.
    #[inline]
    pub const fn cluster_major(&self) -> u32 {
        self.cluster_major
    }

    /// Cluster extent along the minor axis.
    #[inline]
    pub const fn cluster_minor(&self) -> u32 {
        self.cluster_minor
    }

    /// Number of whole clusters along the padded major axis.
    #[inline]
    pub const fn clusters_along_major(&self) -> u32 {
        self.clusters_along_major
    }

    /// Number of whole clusters along the padded minor axis.
    #[inline]
    pub const fn clusters_along_minor(&self) -> u32 {
        self.clusters_along_minor
    }

    /// Physical tiles in one batch, `padded.tiles_m * padded.tiles_n`.
    #[inline]
    pub const fn tiles_per_batch(&self) -> u64 {
        self.tiles_per_batch
    }

    /// Physical tiles across all batches. Linear indices range over `[0, total_tiles)`.
    #[inline]
    pub const fn total_tiles(&self) -> u64 {
        self.total_tiles
    }

    /// Tiles inside the logical problem, `tiles_m * tiles_n * batches`.
    ///
    /// Saturates at [`u64::MAX`].
    #[inline]
    pub const fn logical_tile_count(&self) -> u64 {
        self.problem
            .tiles_per_batch()
            .saturating_mul(self.problem.batches as u64)
    }

    #[cfg(feature = "tracing")]
    fn trace_configuration(&self) {
        if !self.has_valid_extent() {
            tracing::warn!(
                tiles_m = self.problem.tiles_m,
                tiles_n = self.problem.tiles_n,
                batches = self.problem.batches,
                "rasterizer configured without any schedulable tiles"
            );
            return;
        }

        tracing::debug!(
            tiles_m = self.problem.tiles_m,
            tiles_n = self.problem.tiles_n,
            batches = self.problem.batches,
            padded_m = self.padded.tiles_m,
            padded_n = self.padded.tiles_n,
            cluster_m = self.cluster.m,
            cluster_n = self.cluster.n,
            swizzle_size = self.swizzle_size(),
            raster_order = ?self.raster_order,
            clusters_along_major = self.clusters_along_major,
            clusters_along_minor = self.clusters_along_minor,
            total_tiles = self.total_tiles,
            "rasterizer configured"
        );
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(
            ProblemShape::default(),
            ClusterShape::default(),
            RasterOptions::default(),
        )
    }
}

/// Pads M and N up to a multiple of `swizzle_size * cluster`. Overflowing axes become 0.
fn pad_problem(problem: &ProblemShape, cluster: ClusterShape, swizzle_size: u32) -> ProblemShape {
    let pad = |value: u32, cluster_extent: u32| {
        swizzle_size
            .checked_mul(cluster_extent)
            .and_then(|alignment| round_up_checked(value, alignment))
            .unwrap_or(0)
    };

    ProblemShape {
        tiles_m: pad(problem.tiles_m, cluster.m),
        tiles_n: pad(problem.tiles_n, cluster.n),
        batches: problem.batches,
    }
}
