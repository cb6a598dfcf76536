use core::time::Duration;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use tile_raster::{ClusterShape, ProblemShape, RasterOptions, RasterOrderOption, Rasterizer};

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

mod decode;
mod encode;

/// Roughly the tile grid of a large GEMM (8192x8192 output with 128x128 tiles, 4 batches).
pub(crate) fn large_problem() -> Rasterizer {
    Rasterizer::new(
        ProblemShape::new(64, 64, 4),
        ClusterShape::new(2, 1),
        RasterOptions::new(8, RasterOrderOption::Heuristic),
    )
}

/// A ragged problem that needs padding on both axes.
pub(crate) fn ragged_problem() -> Rasterizer {
    Rasterizer::new(
        ProblemShape::new(127, 93, 2),
        ClusterShape::new(2, 2),
        RasterOptions::new(8, RasterOrderOption::Heuristic),
    )
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rasterize");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    for (name, rasterizer) in [("large", large_problem()), ("ragged", ragged_problem())] {
        group.throughput(Throughput::Elements(rasterizer.total_tiles()));
        decode::run_benchmarks(&mut group, name, &rasterizer);
        encode::run_benchmarks(&mut group, name, &rasterizer);
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(unix))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
