#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "c-exports")]
extern crate alloc;

pub mod builder;
pub mod error;

#[cfg(feature = "c-exports")]
pub mod c_api;

pub use builder::RasterizerBuilder;
pub use error::TileRasterError;

// Re-export the types callers need to use a built rasterizer
pub use tile_raster::{
    ClusterShape, INVALID_INDEX, PhysicalTiles, ProblemShape, RasterError, RasterOptions,
    RasterOrder, RasterOrderOption, Rasterizer, TileCoord, WorkerTiles,
};
