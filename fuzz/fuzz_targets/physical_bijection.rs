#![no_main]

// Every physical index must decode to a valid tile that encodes back to the same index.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tile_raster::{ClusterShape, ProblemShape, RasterOptions, RasterOrderOption, Rasterizer};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub tiles_m: u32,
    pub tiles_n: u32,
    pub batches: u16,
    pub cluster_m: u8,
    pub cluster_n: u8,
    pub max_swizzle_size: u32,
    pub raster_order: u8,
    pub indices: [u64; 8],
}

fuzz_target!(|input: Input| {
    let raster_order = match input.raster_order % 3 {
        0 => RasterOrderOption::Heuristic,
        1 => RasterOrderOption::AlongM,
        _ => RasterOrderOption::AlongN,
    };
    let rasterizer = Rasterizer::new(
        ProblemShape::new(input.tiles_m, input.tiles_n, input.batches as u32),
        ClusterShape::new(input.cluster_m as u32, input.cluster_n as u32),
        RasterOptions::new(input.max_swizzle_size, raster_order),
    );

    if !rasterizer.has_valid_extent() {
        for index in input.indices {
            assert!(!rasterizer.decode(index).valid);
        }
        return;
    }

    for index in input.indices {
        let tile = rasterizer.decode(index);
        if index >= rasterizer.total_tiles() {
            assert!(!tile.valid);
            continue;
        }

        assert!(tile.valid);
        assert_eq!(
            tile.in_bounds,
            rasterizer.problem_shape().contains(tile.m, tile.n, tile.l)
        );
        assert_eq!(rasterizer.encode(tile.m, tile.n, tile.l, true), index);
    }
});
