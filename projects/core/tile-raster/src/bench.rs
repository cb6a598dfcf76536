//! Reference implementations used for benchmarking and cross-checking.
//!
//! These perform the same mapping as [`Rasterizer::decode`] and [`Rasterizer::encode`],
//! but divide by `swizzle_size` with plain integer division instead of shifts and masks.
//! They must produce identical results.
#![cfg(not(tarpaulin_include))]

use crate::{Rasterizer, TileCoord, INVALID_INDEX};

/// [`Rasterizer::decode`] using generic division for the swizzle.
pub fn decode_generic_division(rasterizer: &Rasterizer, linear_index: u64) -> TileCoord {
    if !rasterizer.has_valid_extent() || linear_index >= rasterizer.total_tiles() {
        return TileCoord::INVALID;
    }

    let swizzle_size = rasterizer.swizzle_size() as u64;
    let cluster_major = rasterizer.cluster_major() as u64;
    let cluster_minor = rasterizer.cluster_minor() as u64;
    let clusters_along_major = rasterizer.clusters_along_major() as u64;

    let l = linear_index / rasterizer.tiles_per_batch();
    let idx_in_batch = linear_index % rasterizer.tiles_per_batch();
    let minor_offset = idx_in_batch % cluster_minor;
    let blk_per_grid_dim = idx_in_batch / cluster_minor;
    let cluster_id_swizzled = blk_per_grid_dim / cluster_major;
    let major_offset = blk_per_grid_dim % cluster_major;

    let offset = cluster_id_swizzled % swizzle_size;
    let extra = cluster_id_swizzled / swizzle_size;
    let cluster_minor_idx = (extra / clusters_along_major) * swizzle_size + offset;
    let cluster_major_idx = extra % clusters_along_major;

    let major = (cluster_major_idx * cluster_major + major_offset) as u32;
    let minor = (cluster_minor_idx * cluster_minor + minor_offset) as u32;
    let (m, n) = rasterizer.raster_order().from_major_minor(major, minor);
    let l = l as u32;

    TileCoord {
        m,
        n,
        l,
        valid: true,
        in_bounds: rasterizer.problem_shape().contains(m, n, l),
    }
}

/// [`Rasterizer::encode`] using generic division for the swizzle.
pub fn encode_generic_division(
    rasterizer: &Rasterizer,
    tile_m: u32,
    tile_n: u32,
    tile_l: u32,
    allow_padded: bool,
) -> u64 {
    let bound = if allow_padded {
        rasterizer.padded_shape()
    } else {
        rasterizer.problem_shape()
    };
    if !rasterizer.has_valid_extent()
        || tile_l >= rasterizer.problem_shape().batches
        || tile_m >= bound.tiles_m
        || tile_n >= bound.tiles_n
    {
        return INVALID_INDEX;
    }

    let swizzle_size = rasterizer.swizzle_size() as u64;
    let cluster_major = rasterizer.cluster_major() as u64;
    let cluster_minor = rasterizer.cluster_minor() as u64;
    let clusters_along_major = rasterizer.clusters_along_major() as u64;

    let (major, minor) = rasterizer.raster_order().to_major_minor(tile_m, tile_n);
    let (major, minor) = (major as u64, minor as u64);
    let cluster_major_idx = major / cluster_major;
    let cluster_minor_idx = minor / cluster_minor;

    let extra = (cluster_minor_idx / swizzle_size) * clusters_along_major + cluster_major_idx;
    let cluster_id_swizzled = extra * swizzle_size + cluster_minor_idx % swizzle_size;

    let blk_per_grid_dim = cluster_id_swizzled * cluster_major + major % cluster_major;
    let idx_in_batch = blk_per_grid_dim * cluster_minor + minor % cluster_minor;
    tile_l as u64 * rasterizer.tiles_per_batch() + idx_in_batch
}
