#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub(crate) mod cluster_swizzle;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod rasterizer;
pub mod selection;
pub mod shape;
pub mod traversal;

#[cfg(any(test, feature = "bench"))]
pub mod bench;

pub use encode::INVALID_INDEX;
pub use error::RasterError;
pub use options::{RasterOptions, RasterOrder, RasterOrderOption};
pub use rasterizer::Rasterizer;
pub use selection::{select_log_swizzle_size, select_raster_order};
pub use shape::{ClusterShape, ProblemShape, TileCoord};
pub use traversal::{PhysicalTiles, WorkerTiles};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
