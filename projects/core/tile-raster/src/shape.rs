//! Problem, cluster and coordinate types.
//!
//! These are the plain value types handed to and returned from a [`crate::Rasterizer`].

/// Extent of the tiled problem, measured in tiles.
///
/// A [`crate::Rasterizer`] holds two of these: the logical shape supplied by the caller,
/// and the padded (physical) shape derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProblemShape {
    /// Number of tiles along the M (row) axis.
    pub tiles_m: u32,
    /// Number of tiles along the N (column) axis.
    pub tiles_n: u32,
    /// Number of independent batches (the L axis).
    pub batches: u32,
}

impl ProblemShape {
    /// Creates a new problem shape.
    pub const fn new(tiles_m: u32, tiles_n: u32, batches: u32) -> Self {
        Self {
            tiles_m,
            tiles_n,
            batches,
        }
    }

    /// Number of tiles in a single batch, `tiles_m * tiles_n`.
    #[inline]
    pub const fn tiles_per_batch(&self) -> u64 {
        self.tiles_m as u64 * self.tiles_n as u64
    }

    /// Whether `(m, n, l)` lies inside this shape.
    #[inline]
    pub const fn contains(&self, m: u32, n: u32, l: u32) -> bool {
        m < self.tiles_m && n < self.tiles_n && l < self.batches
    }
}

/// Number of tiles along each axis that form one cluster.
///
/// Tiles of a cluster always receive contiguous linear indices. A zero extent is
/// coerced to 1 when the rasterizer is configured; see [`ClusterShape::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterShape {
    /// Cluster extent along M.
    pub m: u32,
    /// Cluster extent along N.
    pub n: u32,
}

impl ClusterShape {
    /// Creates a new cluster shape. Zero extents are kept as given until normalization.
    pub const fn new(m: u32, n: u32) -> Self {
        Self { m, n }
    }

    /// Returns this shape with zero extents replaced by 1.
    #[inline]
    pub const fn normalized(self) -> Self {
        Self {
            m: if self.m == 0 { 1 } else { self.m },
            n: if self.n == 0 { 1 } else { self.n },
        }
    }
}

impl Default for ClusterShape {
    fn default() -> Self {
        Self { m: 1, n: 1 }
    }
}

/// The result of decoding a linear index.
///
/// - `valid`: the index lay inside `[0, total_tiles)` of a correctly configured rasterizer.
/// - `in_bounds`: additionally, the coordinate lies inside the logical (unpadded) problem.
///
/// A coordinate that is `valid` but not `in_bounds` names a padding tile. Padding tiles
/// exist only so that clusters stay whole; the caller should skip them and do no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    /// Tile index along M.
    pub m: u32,
    /// Tile index along N.
    pub n: u32,
    /// Batch index.
    pub l: u32,
    /// Whether the decoded index was inside the physical index space.
    pub valid: bool,
    /// Whether the coordinate is inside the logical problem.
    pub in_bounds: bool,
}

impl TileCoord {
    /// Returned for any index that cannot be decoded.
    pub const INVALID: Self = Self {
        m: 0,
        n: 0,
        l: 0,
        valid: false,
        in_bounds: false,
    };

    /// Whether the index this came from was decodable at all.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether this coordinate names a padding tile (`valid` but not `in_bounds`).
    #[inline]
    pub const fn is_padding(&self) -> bool {
        self.valid && !self.in_bounds
    }

    /// The `(m, n, l)` triple, regardless of validity.
    #[inline]
    pub const fn as_tuple(&self) -> (u32, u32, u32) {
        (self.m, self.n, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ClusterShape::new(0, 0), ClusterShape::new(1, 1))]
    #[case(ClusterShape::new(0, 4), ClusterShape::new(1, 4))]
    #[case(ClusterShape::new(2, 0), ClusterShape::new(2, 1))]
    #[case(ClusterShape::new(2, 2), ClusterShape::new(2, 2))]
    fn zero_cluster_extents_become_one(
        #[case] input: ClusterShape,
        #[case] expected: ClusterShape,
    ) {
        assert_eq!(input.normalized(), expected);
    }

    #[test]
    fn tiles_per_batch_does_not_overflow() {
        let shape = ProblemShape::new(u32::MAX, u32::MAX, 1);
        assert_eq!(shape.tiles_per_batch(), u32::MAX as u64 * u32::MAX as u64);
    }

    #[test]
    fn contains_uses_exclusive_bounds() {
        let shape = ProblemShape::new(4, 3, 2);
        assert!(shape.contains(3, 2, 1));
        assert!(!shape.contains(4, 0, 0));
        assert!(!shape.contains(0, 3, 0));
        assert!(!shape.contains(0, 0, 2));
    }

    #[test]
    fn invalid_coord_is_neither_valid_nor_padding() {
        assert!(!TileCoord::INVALID.is_valid());
        assert!(!TileCoord::INVALID.in_bounds);
        assert!(!TileCoord::INVALID.is_padding());
        assert_eq!(TileCoord::default(), TileCoord::INVALID);
    }
}
