//! Builder pattern implementation for rasterizer configuration.

use crate::TileRasterError;
use tile_raster::{
    ClusterShape, ProblemShape, RasterError, RasterOptions, RasterOrderOption, Rasterizer,
};

/// Rasterizer configuration builder.
///
/// Every setting except the problem extent is optional:
///
/// - cluster: `1x1`
/// - maximum swizzle size: `1` (no swizzle)
/// - raster order: [`RasterOrderOption::Heuristic`]
///
/// [`build`](Self::build) validates the configuration, so a [`Rasterizer`] obtained from
/// here always has a valid extent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterizerBuilder {
    problem: Option<ProblemShape>,
    cluster: Option<ClusterShape>,
    max_swizzle_size: Option<u32>,
    raster_order: Option<RasterOrderOption>,
}

impl RasterizerBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the problem extent, in tiles.
    pub fn problem(mut self, tiles_m: u32, tiles_n: u32, batches: u32) -> Self {
        self.problem = Some(ProblemShape::new(tiles_m, tiles_n, batches));
        self
    }

    /// Set the cluster extent, in tiles. Zero extents are treated as 1.
    pub fn cluster(mut self, m: u32, n: u32) -> Self {
        self.cluster = Some(ClusterShape::new(m, n));
        self
    }

    /// Set the requested maximum swizzle size.
    ///
    /// The value is clamped down to one of `1, 2, 4, 8`, and the swizzle actually used may
    /// be smaller still for narrow problems.
    pub fn max_swizzle_size(mut self, max_swizzle_size: u32) -> Self {
        self.max_swizzle_size = Some(max_swizzle_size);
        self
    }

    /// Set the raster order.
    pub fn raster_order(mut self, raster_order: RasterOrderOption) -> Self {
        self.raster_order = Some(raster_order);
        self
    }

    /// The options that [`build`](Self::build) will use.
    pub fn options(&self) -> RasterOptions {
        let defaults = RasterOptions::default();
        RasterOptions::new(
            self.max_swizzle_size.unwrap_or(defaults.max_swizzle_size),
            self.raster_order.unwrap_or(defaults.raster_order),
        )
    }

    /// Build the rasterizer.
    ///
    /// # Errors
    ///
    /// - [`TileRasterError::EmptyProblem`] if no problem was set, or it has a zero extent.
    /// - [`TileRasterError::Raster`] with [`RasterError::InvalidExtent`] if the padded
    ///   problem does not fit the index space.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster_api::{RasterizerBuilder, RasterOrderOption};
    ///
    /// let rasterizer = RasterizerBuilder::new()
    ///     .problem(127, 93, 2)
    ///     .cluster(2, 2)
    ///     .max_swizzle_size(8)
    ///     .raster_order(RasterOrderOption::Heuristic)
    ///     .build()?;
    ///
    /// assert_eq!(rasterizer.total_tiles(), 128 * 96 * 2);
    /// # Ok::<(), tile_raster_api::TileRasterError>(())
    /// ```
    pub fn build(&self) -> Result<Rasterizer, TileRasterError> {
        let problem = self.problem.unwrap_or_default();
        if problem.tiles_m == 0 || problem.tiles_n == 0 || problem.batches == 0 {
            return Err(TileRasterError::EmptyProblem {
                tiles_m: problem.tiles_m,
                tiles_n: problem.tiles_n,
                batches: problem.batches,
            });
        }

        let rasterizer = Rasterizer::new(problem, self.cluster.unwrap_or_default(), self.options());
        if !rasterizer.has_valid_extent() {
            return Err(RasterError::InvalidExtent.into());
        }
        Ok(rasterizer)
    }
}
