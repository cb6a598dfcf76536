#![no_main]

// Every logical coordinate must encode to an index that decodes back to the same in-bounds tile.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tile_raster::{
    ClusterShape, ProblemShape, RasterOptions, RasterOrderOption, Rasterizer, INVALID_INDEX,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub tiles_m: u32,
    pub tiles_n: u32,
    pub batches: u16,
    pub cluster_m: u8,
    pub cluster_n: u8,
    pub max_swizzle_size: u8,
    pub along_m: Option<bool>,
    pub coords: [(u32, u32, u16); 8],
}

fuzz_target!(|input: Input| {
    let raster_order = match input.along_m {
        None => RasterOrderOption::Heuristic,
        Some(true) => RasterOrderOption::AlongM,
        Some(false) => RasterOrderOption::AlongN,
    };
    let rasterizer = Rasterizer::new(
        ProblemShape::new(input.tiles_m, input.tiles_n, input.batches as u32),
        ClusterShape::new(input.cluster_m as u32, input.cluster_n as u32),
        RasterOptions::new(input.max_swizzle_size as u32, raster_order),
    );
    let problem = rasterizer.problem_shape();

    for (m, n, l) in input.coords {
        let l = l as u32;
        let index = rasterizer.encode(m, n, l, false);

        if !rasterizer.has_valid_extent() || !problem.contains(m, n, l) {
            assert_eq!(index, INVALID_INDEX);
            continue;
        }

        assert!(index < rasterizer.total_tiles());
        let tile = rasterizer.decode(index);
        assert!(tile.valid && tile.in_bounds);
        assert_eq!(tile.as_tuple(), (m, n, l));
    }
});
