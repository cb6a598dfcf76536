//! Opaque rasterizer handle and its lifecycle, decode and encode functions.

use crate::RasterizerBuilder;
use crate::c_api::error::{TlrErrorCode, TlrResult};
use alloc::boxed::Box;
use core::ptr;
use tile_raster::{RasterOrderOption, Rasterizer, TileCoord};

/// Opaque rasterizer handle.
///
/// - Created with [`tlr_rasterizer_new()`]
/// - Freed with [`tlr_rasterizer_free()`] when no longer needed
///
/// A handle is immutable after creation, so it may be shared between threads for
/// decode/encode as long as it is not freed concurrently.
#[repr(C)]
pub struct TlrRasterizer {
    // Private field to ensure it's opaque
    _private: [u8; 0],
}

/// Internal representation of the rasterizer handle
pub(crate) struct TlrRasterizerInner {
    pub(crate) rasterizer: Rasterizer,
}

/// FFI-safe version of [`TileCoord`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlrTileCoord {
    /// Tile index along M.
    pub m: u32,
    /// Tile index along N.
    pub n: u32,
    /// Batch index.
    pub l: u32,
    /// Whether the index was inside the physical index space.
    pub valid: bool,
    /// Whether the tile is inside the logical problem. `false` for padding tiles.
    pub in_bounds: bool,
}

impl From<TileCoord> for TlrTileCoord {
    fn from(tile: TileCoord) -> Self {
        Self {
            m: tile.m,
            n: tile.n,
            l: tile.l,
            valid: tile.valid,
            in_bounds: tile.in_bounds,
        }
    }
}

/// Maps the C raster order value (0 = heuristic, 1 = along M, 2 = along N).
fn raster_order_from_c(value: u8) -> Option<RasterOrderOption> {
    match value {
        0 => Some(RasterOrderOption::Heuristic),
        1 => Some(RasterOrderOption::AlongM),
        2 => Some(RasterOrderOption::AlongN),
        _ => None,
    }
}

/// Get shared access to the inner rasterizer.
///
/// # Safety
/// - `rasterizer` must be a valid, non-null pointer to a [`TlrRasterizer`]
unsafe fn get_rasterizer<'a>(rasterizer: *const TlrRasterizer) -> &'a Rasterizer {
    debug_assert!(!rasterizer.is_null());
    unsafe { &(*(rasterizer as *const TlrRasterizerInner)).rasterizer }
}

/// Create a new rasterizer.
///
/// # Parameters
/// - `tiles_m`, `tiles_n`, `batches`: problem extent in tiles
/// - `cluster_m`, `cluster_n`: cluster extent in tiles (0 is treated as 1)
/// - `max_swizzle_size`: requested maximum swizzle size, clamped to 1, 2, 4 or 8
/// - `raster_order`: 0 = heuristic, 1 = along M, 2 = along N
/// - `out_rasterizer`: receives the new handle on success, null on failure
///
/// # Safety
/// - `out_rasterizer` must be a valid pointer to writable memory
///
/// # Returns
/// A [`TlrResult`]; on success the handle must be freed with [`tlr_rasterizer_free()`].
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tlr_rasterizer_new(
    tiles_m: u32,
    tiles_n: u32,
    batches: u32,
    cluster_m: u32,
    cluster_n: u32,
    max_swizzle_size: u32,
    raster_order: u8,
    out_rasterizer: *mut *mut TlrRasterizer,
) -> TlrResult {
    if out_rasterizer.is_null() {
        return TlrResult::from_error_code(TlrErrorCode::NullOutputPointer);
    }
    unsafe { *out_rasterizer = ptr::null_mut() };

    let Some(raster_order) = raster_order_from_c(raster_order) else {
        return TlrResult::from_error_code(TlrErrorCode::InvalidRasterOrder);
    };

    let built = RasterizerBuilder::new()
        .problem(tiles_m, tiles_n, batches)
        .cluster(cluster_m, cluster_n)
        .max_swizzle_size(max_swizzle_size)
        .raster_order(raster_order)
        .build();

    match built {
        Ok(rasterizer) => {
            let inner = Box::new(TlrRasterizerInner { rasterizer });
            unsafe { *out_rasterizer = Box::into_raw(inner) as *mut TlrRasterizer };
            TlrResult::success()
        }
        Err(error) => error.into(),
    }
}

/// Free a rasterizer handle.
///
/// # Safety
/// - `rasterizer` must be null or a pointer returned by [`tlr_rasterizer_new()`]
/// - `rasterizer` must not have been freed already
/// - After calling this function, `rasterizer` becomes invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tlr_rasterizer_free(rasterizer: *mut TlrRasterizer) {
    if !rasterizer.is_null() {
        unsafe {
            drop(Box::from_raw(rasterizer as *mut TlrRasterizerInner));
        }
    }
}

/// Number of physical tiles, i.e. the exclusive upper bound of linear indices.
///
/// # Safety
/// - `rasterizer` must be null or a valid pointer to a [`TlrRasterizer`]
///
/// # Returns
/// The tile count, or 0 if `rasterizer` is null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tlr_rasterizer_total_tiles(rasterizer: *const TlrRasterizer) -> u64 {
    if rasterizer.is_null() {
        return 0;
    }
    unsafe { get_rasterizer(rasterizer) }.total_tiles()
}

/// Decode a linear index into a tile coordinate.
///
/// Padding tiles decode successfully with `in_bounds == false`; skip them.
///
/// # Safety
/// - `rasterizer` must be a valid pointer to a [`TlrRasterizer`]
/// - `out_tile` must be a valid pointer to writable memory
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tlr_rasterizer_decode(
    rasterizer: *const TlrRasterizer,
    linear_index: u64,
    out_tile: *mut TlrTileCoord,
) -> TlrResult {
    if rasterizer.is_null() {
        return TlrResult::from_error_code(TlrErrorCode::NullRasterizerPointer);
    }
    if out_tile.is_null() {
        return TlrResult::from_error_code(TlrErrorCode::NullOutputPointer);
    }

    let rasterizer = unsafe { get_rasterizer(rasterizer) };
    match rasterizer.try_decode(linear_index) {
        Ok(tile) => {
            unsafe { *out_tile = tile.into() };
            TlrResult::success()
        }
        Err(error) => {
            unsafe { *out_tile = TileCoord::INVALID.into() };
            error.into()
        }
    }
}

/// Encode a tile coordinate into its linear index.
///
/// With `allow_padded` the coordinate is checked against the padded extent instead of the
/// logical one, which is required to encode padding tiles.
///
/// # Safety
/// - `rasterizer` must be a valid pointer to a [`TlrRasterizer`]
/// - `out_index` must be a valid pointer to writable memory
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tlr_rasterizer_encode(
    rasterizer: *const TlrRasterizer,
    tile_m: u32,
    tile_n: u32,
    tile_l: u32,
    allow_padded: bool,
    out_index: *mut u64,
) -> TlrResult {
    if rasterizer.is_null() {
        return TlrResult::from_error_code(TlrErrorCode::NullRasterizerPointer);
    }
    if out_index.is_null() {
        return TlrResult::from_error_code(TlrErrorCode::NullOutputPointer);
    }

    let rasterizer = unsafe { get_rasterizer(rasterizer) };
    match rasterizer.try_encode(tile_m, tile_n, tile_l, allow_padded) {
        Ok(index) => {
            unsafe { *out_index = index };
            TlrResult::success()
        }
        Err(error) => {
            unsafe { *out_index = tile_raster::INVALID_INDEX };
            error.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_rasterizer(
        problem: (u32, u32, u32),
        raster_order: u8,
    ) -> (TlrResult, *mut TlrRasterizer) {
        let mut handle = ptr::null_mut();
        let result = unsafe {
            tlr_rasterizer_new(problem.0, problem.1, problem.2, 2, 2, 8, raster_order, &mut handle)
        };
        (result, handle)
    }

    #[test]
    fn round_trips_through_the_c_surface() {
        let (result, handle) = new_rasterizer((127, 93, 2), 0);
        assert!(result.is_success());
        assert!(!handle.is_null());

        unsafe {
            assert_eq!(tlr_rasterizer_total_tiles(handle), 128 * 96 * 2);

            let mut index = 0;
            let encoded = tlr_rasterizer_encode(handle, 100, 50, 1, false, &mut index);
            assert!(encoded.is_success());

            let mut tile = TlrTileCoord::default();
            assert!(tlr_rasterizer_decode(handle, index, &mut tile).is_success());
            assert_eq!((tile.m, tile.n, tile.l), (100, 50, 1));
            assert!(tile.valid && tile.in_bounds);

            tlr_rasterizer_free(handle);
        }
    }

    #[test]
    fn failures_write_sentinels() {
        let (_, handle) = new_rasterizer((4, 4, 1), 1);
        unsafe {
            let mut tile = TlrTileCoord {
                valid: true,
                ..TlrTileCoord::default()
            };
            let result = tlr_rasterizer_decode(handle, u64::MAX, &mut tile);
            assert_eq!(result.error_code, TlrErrorCode::IndexOutOfRange);
            assert!(!tile.valid);

            let mut index = 0;
            let result = tlr_rasterizer_encode(handle, 0, 0, 1, true, &mut index);
            assert_eq!(result.error_code, TlrErrorCode::BatchOutOfRange);
            assert_eq!(index, tile_raster::INVALID_INDEX);

            tlr_rasterizer_free(handle);
        }
    }

    #[test]
    fn rejects_bad_configuration() {
        let (result, handle) = new_rasterizer((0, 4, 1), 0);
        assert_eq!(result.error_code, TlrErrorCode::EmptyProblem);
        assert!(handle.is_null());

        let (result, handle) = new_rasterizer((4, 4, 1), 3);
        assert_eq!(result.error_code, TlrErrorCode::InvalidRasterOrder);
        assert!(handle.is_null());
    }

    #[test]
    fn null_pointers_are_reported() {
        unsafe {
            let result = tlr_rasterizer_new(4, 4, 1, 1, 1, 1, 0, ptr::null_mut());
            assert_eq!(result.error_code, TlrErrorCode::NullOutputPointer);

            let mut tile = TlrTileCoord::default();
            let result = tlr_rasterizer_decode(ptr::null(), 0, &mut tile);
            assert_eq!(result.error_code, TlrErrorCode::NullRasterizerPointer);

            let mut index = 0;
            let result = tlr_rasterizer_encode(ptr::null(), 0, 0, 0, false, &mut index);
            assert_eq!(result.error_code, TlrErrorCode::NullRasterizerPointer);

            assert_eq!(tlr_rasterizer_total_tiles(ptr::null()), 0);
            tlr_rasterizer_free(ptr::null_mut());
        }
    }
}
