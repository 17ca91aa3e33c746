//! `HLR Units` - Blender <-> Source engine unit converter
//!
//! A single small window with two input fields. Typing a value in Blender units
//! shows the same length in Source engine units and vice versa (64 Source units
//! per Blender unit).
//!
//! The library holds everything that does not need a window: the conversion
//! core in [`units`], the [`controller`] that drives it tick by tick through the
//! [`units::UiPort`] seam, compiled-in [`config`], [`error`] types and logging
//! setup in [`utils`]. The slint window lives in the binary.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod units;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{HlrUnitsError, Result};
pub use units::{ConversionState, Edit, Field};
