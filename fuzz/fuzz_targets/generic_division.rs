#![no_main]

// The shift/mask swizzle must agree with plain division for any configuration.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tile_raster::bench::{decode_generic_division, encode_generic_division};
use tile_raster::{ClusterShape, ProblemShape, RasterOptions, RasterOrderOption, Rasterizer};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub tiles_m: u32,
    pub tiles_n: u32,
    pub batches: u8,
    pub cluster_m: u8,
    pub cluster_n: u8,
    pub max_swizzle_size: u8,
    pub along_m: bool,
    pub indices: [u64; 4],
}

fuzz_target!(|input: Input| {
    let raster_order = if input.along_m {
        RasterOrderOption::AlongM
    } else {
        RasterOrderOption::AlongN
    };
    let rasterizer = Rasterizer::new(
        ProblemShape::new(input.tiles_m, input.tiles_n, input.batches as u32),
        ClusterShape::new(input.cluster_m as u32, input.cluster_n as u32),
        RasterOptions::new(input.max_swizzle_size as u32, raster_order),
    );

    for index in input.indices {
        // Fold into range so most probes hit a real tile.
        let index = match rasterizer.total_tiles() {
            0 => index,
            total => index % total,
        };

        let tile = rasterizer.decode(index);
        assert_eq!(tile, decode_generic_division(&rasterizer, index));
        assert_eq!(
            rasterizer.encode(tile.m, tile.n, tile.l, true),
            encode_generic_division(&rasterizer, tile.m, tile.n, tile.l, true)
        );
    }
});
