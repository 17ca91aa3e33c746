//! Unit conversion module
//!
//! Pure conversion between Blender units and Source engine units, plus the
//! synchronization rule that keeps the two displayed values consistent.
//!
//! # Overview
//!
//! - `convert`: the two linear mappings (scale factor 64 and its inverse)
//! - `state`: `ConversionState`, the pair of values shown in the window
//! - `sync`: change detection and recomputation, one step per tick
//!
//! Nothing in here depends on the GUI toolkit. The window talks to this module
//! through the [`UiPort`] trait.
//!
//! # Tick Flow
//!
//! ```text
//! UiPort::read_inputs → synchronize(previous, current) → UiPort::present
//! ```

pub mod convert;
pub mod state;
pub mod sync;

pub use convert::{SOURCE_UNITS_PER_BLENDER_UNIT, blender_to_source, source_to_blender};
pub use state::{ConversionState, Edit, Field};
pub use sync::{UiPort, run_tick, synchronize, tick};
