//! Concrete configurations with known derived parameters.

use rstest::rstest;
use tile_raster::{
    ClusterShape, ProblemShape, RasterError, RasterOptions, RasterOrder, RasterOrderOption,
    Rasterizer, INVALID_INDEX,
};

fn rasterizer(problem: (u32, u32, u32), cluster: (u32, u32), options: RasterOptions) -> Rasterizer {
    Rasterizer::new(
        ProblemShape::new(problem.0, problem.1, problem.2),
        ClusterShape::new(cluster.0, cluster.1),
        options,
    )
}

#[test]
fn ragged_problem_with_full_swizzle() {
    let r = rasterizer(
        (127, 93, 2),
        (2, 2),
        RasterOptions::new(8, RasterOrderOption::Heuristic),
    );

    assert_eq!(r.swizzle_size(), 8);
    assert_eq!(r.padded_shape(), ProblemShape::new(128, 96, 2));
    assert_eq!(r.raster_order(), RasterOrder::AlongN);

    let mut mismatches = 0;
    let mut in_bounds = 0;
    for l in 0..2 {
        for m in 0..127 {
            for n in 0..93 {
                let tile = r.decode(r.encode(m, n, l, false));
                in_bounds += tile.in_bounds as u32;
                mismatches += (tile.as_tuple() != (m, n, l)) as u32;
            }
        }
    }
    assert_eq!(mismatches, 0);
    assert_eq!(in_bounds, 23_622);
    assert_eq!(r.tiles().filter(|(_, tile)| tile.in_bounds).count(), 23_622);
}

#[test]
fn small_problem_without_swizzle() {
    let r = rasterizer(
        (4, 4, 1),
        (1, 1),
        RasterOptions::new(1, RasterOrderOption::Heuristic),
    );

    assert_eq!(r.swizzle_size(), 1);
    assert_eq!(r.padded_shape(), r.problem_shape());
    assert_eq!(r.total_tiles(), 16);
    assert!(r.tiles().all(|(_, tile)| tile.valid && tile.in_bounds));
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(3, 2)]
#[case(5, 4)]
#[case(9, 8)]
#[case(u32::MAX, 8)]
fn requested_swizzle_is_clamped(#[case] requested: u32, #[case] effective: u32) {
    // Large enough that only the cap limits the swizzle size.
    let r = rasterizer(
        (64, 64, 1),
        (1, 1),
        RasterOptions::new(requested, RasterOrderOption::Heuristic),
    );
    assert_eq!(r.swizzle_size(), effective);
}

#[rstest]
#[case((16, 16, 1), RasterOrder::AlongN)]
#[case((15, 16, 1), RasterOrder::AlongN)] // pads to 16x16
#[case((16, 17, 1), RasterOrder::AlongM)]
#[case((17, 16, 1), RasterOrder::AlongN)]
fn heuristic_order_from_padded_shape(
    #[case] problem: (u32, u32, u32),
    #[case] expected: RasterOrder,
) {
    let r = rasterizer(
        problem,
        (1, 1),
        RasterOptions::new(8, RasterOrderOption::Heuristic),
    );
    assert_eq!(r.raster_order(), expected);
}

#[test]
fn encode_at_the_padded_bound_is_rejected() {
    let r = rasterizer(
        (127, 93, 2),
        (2, 2),
        RasterOptions::new(8, RasterOrderOption::Heuristic),
    );
    let padded = r.padded_shape();

    assert_eq!(r.encode(padded.tiles_m, 0, 0, true), INVALID_INDEX);
    assert_ne!(r.encode(padded.tiles_m - 1, 0, 0, true), INVALID_INDEX);
    assert!(matches!(
        r.try_encode(padded.tiles_m, 0, 0, true),
        Err(RasterError::CoordinateOutOfRange { bound_m: 128, .. })
    ));
}

#[test]
fn explicit_order_overrides_heuristic() {
    let along_m = rasterizer(
        (127, 93, 2),
        (2, 2),
        RasterOptions::new(8, RasterOrderOption::AlongM),
    );
    let along_n = rasterizer(
        (127, 93, 2),
        (2, 2),
        RasterOptions::new(8, RasterOrderOption::AlongN),
    );

    assert_eq!(along_m.raster_order(), RasterOrder::AlongM);
    assert_eq!(along_m.clusters_along_major(), 64);
    assert_eq!(along_n.clusters_along_major(), 48);
    // Same padded space, different walk.
    assert_eq!(along_m.total_tiles(), along_n.total_tiles());
    assert_ne!(along_m.decode(1), along_n.decode(1));
}
