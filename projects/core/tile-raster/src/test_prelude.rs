//! Common test imports and utilities
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

extern crate alloc;
extern crate std;

pub use alloc::{format, vec, vec::Vec};
pub use rstest::rstest;
pub use std::collections::HashSet;

pub use crate::{
    ClusterShape, ProblemShape, RasterOptions, RasterOrder, RasterOrderOption, Rasterizer,
    TileCoord, INVALID_INDEX,
};

/// Builds a rasterizer from plain numbers.
pub(crate) fn rasterizer(
    problem: (u32, u32, u32),
    cluster: (u32, u32),
    max_swizzle_size: u32,
    raster_order: RasterOrderOption,
) -> Rasterizer {
    Rasterizer::new(
        ProblemShape::new(problem.0, problem.1, problem.2),
        ClusterShape::new(cluster.0, cluster.1),
        RasterOptions::new(max_swizzle_size, raster_order),
    )
}
