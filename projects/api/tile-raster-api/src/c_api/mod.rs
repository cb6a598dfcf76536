//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! The `c-exports` feature exports a small, ABI-stable surface for driving the rasterizer
//! from C, C++, or any other language with a C FFI. The rasterizer is exposed as an opaque
//! handle; every fallible function returns a [`TlrResult`](error::TlrResult).
//!
//! ## Example Usage
//!
//! ```c
//! #include <stdio.h>
//!
//! TlrRasterizer* rasterizer = NULL;
//! TlrResult result = tlr_rasterizer_new(
//!     127, 93, 2,  // tiles_m, tiles_n, batches
//!     2, 2,        // cluster_m, cluster_n
//!     8,           // max_swizzle_size
//!     0,           // raster order: heuristic
//!     &rasterizer);
//!
//! if (result.error_code != TLR_SUCCESS) {
//!     printf("%s\n", tlr_error_message(result.error_code));
//!     return 1;
//! }
//!
//! uint64_t total = tlr_rasterizer_total_tiles(rasterizer);
//! for (uint64_t index = 0; index < total; index++) {
//!     TlrTileCoord tile;
//!     tlr_rasterizer_decode(rasterizer, index, &tile);
//!     if (!tile.in_bounds)
//!         continue; // padding tile, no work
//!     // compute tile (tile.m, tile.n, tile.l)...
//! }
//!
//! tlr_rasterizer_free(rasterizer);
//! ```
//!
//! ## Functions
//!
//! - **`tlr_rasterizer_new(...)`** - Validate a configuration and create a handle
//! - **`tlr_rasterizer_free(rasterizer)`** - Free a handle (required to avoid memory leaks)
//! - **`tlr_rasterizer_total_tiles(rasterizer)`** - Exclusive upper bound of linear indices
//! - **`tlr_rasterizer_decode(rasterizer, index, out_tile)`** - Linear index to tile
//! - **`tlr_rasterizer_encode(rasterizer, m, n, l, allow_padded, out_index)`** - Tile to linear index
//! - **`tlr_error_message(error_code)`** - Static description of an error code

pub mod error;
pub mod rasterizer;
