#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod align;
pub mod swizzle_cap;

pub use align::*;
pub use swizzle_cap::*;
