use criterion::BenchmarkId;
use std::hint::black_box;
use tile_raster::bench::decode_generic_division;
use tile_raster::{Rasterizer, TileCoord};

fn bench_decode(b: &mut criterion::Bencher, rasterizer: &Rasterizer) {
    b.iter(|| {
        for index in 0..rasterizer.total_tiles() {
            black_box(rasterizer.decode(black_box(index)));
        }
    });
}

fn bench_decode_generic_division(b: &mut criterion::Bencher, rasterizer: &Rasterizer) {
    b.iter(|| {
        for index in 0..rasterizer.total_tiles() {
            black_box(decode_generic_division(rasterizer, black_box(index)));
        }
    });
}

fn bench_decode_into(
    b: &mut criterion::Bencher,
    rasterizer: &Rasterizer,
    output: &mut [TileCoord],
) {
    b.iter(|| black_box(rasterizer.decode_into(black_box(0), output)));
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    rasterizer: &Rasterizer,
) {
    group.bench_with_input(BenchmarkId::new("decode", name), rasterizer, |b, r| {
        bench_decode(b, r)
    });
    group.bench_with_input(
        BenchmarkId::new("decode_generic_division", name),
        rasterizer,
        |b, r| bench_decode_generic_division(b, r),
    );

    let mut output = vec![TileCoord::INVALID; rasterizer.total_tiles() as usize];
    group.bench_with_input(BenchmarkId::new("decode_into", name), rasterizer, |b, r| {
        bench_decode_into(b, r, &mut output)
    });
}
