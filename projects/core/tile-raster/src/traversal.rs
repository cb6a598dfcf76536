//! Iterators for driving a scheduling loop or a visualization.
//!
//! - [`PhysicalTiles`] walks every physical index in order, padding included.
//! - [`WorkerTiles`] walks the indices a single persistent worker would be handed when
//!   `num_workers` workers stride through the index space, skipping padding tiles.

use crate::{Rasterizer, TileCoord};
use core::iter::FusedIterator;

impl Rasterizer {
    /// Returns an iterator over `(linear_index, tile)` for every index in `[0, total_tiles)`.
    ///
    /// Padding tiles are included; check [`TileCoord::in_bounds`] to skip them. An invalid
    /// extent yields an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, Rasterizer};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(3, 3, 1),
    ///     ClusterShape::new(2, 2),
    ///     RasterOptions::default(),
    /// );
    ///
    /// assert_eq!(rasterizer.tiles().len(), 16);
    /// assert_eq!(rasterizer.tiles().filter(|(_, tile)| tile.in_bounds).count(), 9);
    /// ```
    pub fn tiles(&self) -> PhysicalTiles<'_> {
        let end = if self.has_valid_extent() {
            self.total_tiles
        } else {
            0
        };
        PhysicalTiles {
            rasterizer: self,
            next: 0,
            end,
        }
    }

    /// Returns the in-bounds tiles handed to worker `worker_id` out of `num_workers`.
    ///
    /// The worker visits indices `worker_id, worker_id + num_workers, ...` below
    /// `total_tiles`, as a persistent worker looping over a grid-strided index would.
    /// Padding tiles are skipped. An empty iterator is returned when `num_workers` is 0,
    /// `worker_id >= num_workers`, or the extent is invalid.
    ///
    /// Across all `worker_id` in `0..num_workers`, every in-bounds tile is yielded exactly
    /// once.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_raster::{ClusterShape, ProblemShape, RasterOptions, Rasterizer};
    ///
    /// let rasterizer = Rasterizer::new(
    ///     ProblemShape::new(5, 5, 1),
    ///     ClusterShape::new(2, 1),
    ///     RasterOptions::default(),
    /// );
    ///
    /// let per_worker: usize = (0..4).map(|worker| rasterizer.worker_tiles(worker, 4).count()).sum();
    /// assert_eq!(per_worker, 25);
    /// ```
    pub fn worker_tiles(&self, worker_id: u64, num_workers: u64) -> WorkerTiles<'_> {
        let exhausted = num_workers == 0 || worker_id >= num_workers || !self.has_valid_extent();
        WorkerTiles {
            rasterizer: self,
            next: if exhausted { self.total_tiles } else { worker_id },
            stride: num_workers,
        }
    }
}

/// Iterator over every physical tile. Created by [`Rasterizer::tiles`].
#[derive(Debug, Clone)]
pub struct PhysicalTiles<'a> {
    rasterizer: &'a Rasterizer,
    next: u64,
    end: u64,
}

impl Iterator for PhysicalTiles<'_> {
    type Item = (u64, TileCoord);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((index, self.rasterizer.decode(index)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Saturates on targets where usize is narrower than the index space.
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n as u64).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for PhysicalTiles<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some((self.end, self.rasterizer.decode(self.end)))
    }
}

impl ExactSizeIterator for PhysicalTiles<'_> {}
impl FusedIterator for PhysicalTiles<'_> {}

/// Iterator over one worker's in-bounds tiles. Created by [`Rasterizer::worker_tiles`].
#[derive(Debug, Clone)]
pub struct WorkerTiles<'a> {
    rasterizer: &'a Rasterizer,
    next: u64,
    stride: u64,
}

impl Iterator for WorkerTiles<'_> {
    type Item = (u64, TileCoord);

    fn next(&mut self) -> Option<Self::Item> {
        let total_tiles = self.rasterizer.total_tiles;
        while self.next < total_tiles {
            let index = self.next;
            // Saturating so the loop ends even for strides near u64::MAX.
            self.next = self.next.saturating_add(self.stride);

            let tile = self.rasterizer.decode(index);
            if tile.in_bounds {
                return Some((index, tile));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total_tiles = self.rasterizer.total_tiles;
        if self.next >= total_tiles {
            return (0, Some(0));
        }
        let upper = (total_tiles - self.next).div_ceil(self.stride);
        (0, usize::try_from(upper).ok())
    }
}

impl FusedIterator for WorkerTiles<'_> {}
