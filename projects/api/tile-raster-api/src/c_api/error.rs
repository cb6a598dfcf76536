//! C API error handling.

use crate::TileRasterError;
use core::ffi::c_char;
use tile_raster::RasterError;

/// C-compatible error codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlrErrorCode {
    /// Operation succeeded
    Success = 0,
    /// The problem has no tiles along at least one axis
    EmptyProblem = 1,
    /// The configuration has no schedulable tiles
    InvalidExtent = 2,
    /// Linear index is outside the physical index space
    IndexOutOfRange = 3,
    /// Tile coordinate is outside the requested bound
    CoordinateOutOfRange = 4,
    /// Batch index is outside the logical problem
    BatchOutOfRange = 5,
    /// Raster order value is not one of the known options
    InvalidRasterOrder = 6,
    /// Null pointer provided for TlrRasterizer parameter
    NullRasterizerPointer = 7,
    /// Null pointer provided for output parameter
    NullOutputPointer = 8,
}

/// C-compatible Result type.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TlrResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: TlrErrorCode,
}

impl TlrResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: TlrErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: TlrErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, TlrErrorCode::Success)
    }
}

impl From<RasterError> for TlrResult {
    fn from(error: RasterError) -> Self {
        let error_code = match error {
            RasterError::InvalidExtent => TlrErrorCode::InvalidExtent,
            RasterError::IndexOutOfRange { .. } => TlrErrorCode::IndexOutOfRange,
            RasterError::CoordinateOutOfRange { .. } => TlrErrorCode::CoordinateOutOfRange,
            RasterError::BatchOutOfRange { .. } => TlrErrorCode::BatchOutOfRange,
        };
        Self::from_error_code(error_code)
    }
}

impl From<TileRasterError> for TlrResult {
    fn from(error: TileRasterError) -> Self {
        match error {
            TileRasterError::EmptyProblem { .. } => {
                Self::from_error_code(TlrErrorCode::EmptyProblem)
            }
            TileRasterError::Raster(inner) => inner.into(),
        }
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
#[unsafe(no_mangle)]
pub extern "C" fn tlr_error_message(error_code: TlrErrorCode) -> *const c_char {
    let message = match error_code {
        TlrErrorCode::Success => c"Success",
        TlrErrorCode::EmptyProblem => c"Problem has no tiles along at least one axis",
        TlrErrorCode::InvalidExtent => c"Configuration has no schedulable tiles",
        TlrErrorCode::IndexOutOfRange => c"Linear index is out of range",
        TlrErrorCode::CoordinateOutOfRange => c"Tile coordinate is out of range",
        TlrErrorCode::BatchOutOfRange => c"Batch index is out of range",
        TlrErrorCode::InvalidRasterOrder => c"Unknown raster order value",
        TlrErrorCode::NullRasterizerPointer => c"Null pointer provided for TlrRasterizer parameter",
        TlrErrorCode::NullOutputPointer => c"Null pointer provided for output parameter",
    };
    message.as_ptr()
}
