use criterion::BenchmarkId;
use std::hint::black_box;
use tile_raster::bench::encode_generic_division;
use tile_raster::{Rasterizer, TileCoord};

fn bench_encode(b: &mut criterion::Bencher, rasterizer: &Rasterizer, tiles: &[TileCoord]) {
    b.iter(|| {
        for tile in tiles {
            black_box(rasterizer.encode(black_box(tile.m), tile.n, tile.l, true));
        }
    });
}

fn bench_encode_generic_division(
    b: &mut criterion::Bencher,
    rasterizer: &Rasterizer,
    tiles: &[TileCoord],
) {
    b.iter(|| {
        for tile in tiles {
            black_box(encode_generic_division(
                rasterizer,
                black_box(tile.m),
                tile.n,
                tile.l,
                true,
            ));
        }
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    rasterizer: &Rasterizer,
) {
    // Encode every tile in decode order, so both directions touch the same coordinates.
    let tiles: Vec<TileCoord> = rasterizer.tiles().map(|(_, tile)| tile).collect();

    group.bench_with_input(BenchmarkId::new("encode", name), &tiles, |b, tiles| {
        bench_encode(b, rasterizer, tiles)
    });
    group.bench_with_input(
        BenchmarkId::new("encode_generic_division", name),
        &tiles,
        |b, tiles| bench_encode_generic_division(b, rasterizer, tiles),
    );
}
