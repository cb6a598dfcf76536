//! The locality-preserving cluster swizzle.
//!
//! The cluster grid is walked in vertical strips that are `swizzle_size` clusters tall along
//! the minor axis. Inside a strip, the swizzled id first advances along the minor axis
//! (`swizzle_size` steps), then moves one cluster along the major axis. Once every major
//! position of the strip has been visited, the next strip starts.
//!
//! With `swizzle_size = 2` and 3 clusters along the major axis, the ids are laid out as:
//!
//! ```text
//!            major ->
//!   minor   0  2  4
//!     |     1  3  5
//!     v     6  8 10
//!           7  9 11
//! ```
//!
//! `swizzle_size` is always a power of two, so the strip arithmetic is done with shifts and
//! masks. [`decode_cluster_id`] and [`encode_cluster_id`] are exact inverses as long as
//! `cluster_major_idx < clusters_along_major` and `clusters_along_major > 0`.

/// Maps a swizzled cluster id to `(cluster_major_idx, cluster_minor_idx)`.
#[inline(always)]
pub(crate) const fn decode_cluster_id(
    cluster_id_swizzled: u64,
    log_swizzle_size: u32,
    clusters_along_major: u64,
) -> (u64, u64) {
    let swizzle_mask = (1u64 << log_swizzle_size) - 1;
    let offset = cluster_id_swizzled & swizzle_mask;
    let extra = cluster_id_swizzled >> log_swizzle_size;

    let cluster_minor_idx = ((extra / clusters_along_major) << log_swizzle_size) + offset;
    let cluster_major_idx = extra % clusters_along_major;
    (cluster_major_idx, cluster_minor_idx)
}

/// Maps `(cluster_major_idx, cluster_minor_idx)` to its swizzled cluster id.
#[inline(always)]
pub(crate) const fn encode_cluster_id(
    cluster_major_idx: u64,
    cluster_minor_idx: u64,
    log_swizzle_size: u32,
    clusters_along_major: u64,
) -> u64 {
    let swizzle_mask = (1u64 << log_swizzle_size) - 1;
    let cluster_minor_div_swizzle = cluster_minor_idx >> log_swizzle_size;
    let offset = cluster_minor_idx & swizzle_mask;

    let extra = cluster_minor_div_swizzle * clusters_along_major + cluster_major_idx;
    (extra << log_swizzle_size) | offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn matches_documented_layout() {
        // (major, minor) for ids 0..12 with swizzle 2 and 3 clusters along major.
        let expected = [
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 2),
            (2, 3),
        ];
        for (id, coords) in expected.iter().enumerate() {
            assert_eq!(decode_cluster_id(id as u64, 1, 3), *coords, "id {id}");
        }
    }

    #[rstest]
    #[case(0, 1)]
    #[case(0, 5)]
    #[case(1, 3)]
    #[case(2, 4)]
    #[case(3, 7)]
    #[case(3, 1)]
    fn encode_inverts_decode(#[case] log_swizzle_size: u32, #[case] clusters_along_major: u64) {
        let swizzle_size = 1u64 << log_swizzle_size;
        // Four full strips.
        let clusters = clusters_along_major * swizzle_size * 4;
        let mut seen = HashSet::new();
        for id in 0..clusters {
            let (major, minor) = decode_cluster_id(id, log_swizzle_size, clusters_along_major);
            assert!(major < clusters_along_major);
            assert!(minor < swizzle_size * 4);
            assert!(seen.insert((major, minor)), "duplicate cluster for id {id}");
            assert_eq!(
                encode_cluster_id(major, minor, log_swizzle_size, clusters_along_major),
                id
            );
        }
    }

    #[test]
    fn swizzle_of_one_is_column_major_over_clusters() {
        for id in 0..20 {
            assert_eq!(decode_cluster_id(id, 0, 5), (id % 5, id / 5));
        }
    }
}
