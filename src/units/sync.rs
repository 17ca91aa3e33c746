//! Synchronization of the two displayed values
//!
//! Each tick compares the current pair against the pair captured at the start
//! of the tick and recomputes the field that was *not* edited. Only one field is
//! ever recomputed per tick, so the two values cannot chase each other.
//!
//! # Precedence
//!
//! The window only lets one field change per tick. If both changed anyway,
//! `source` is treated as authoritative and `blender` is recomputed from it.

use super::convert::{blender_to_source, source_to_blender};
use super::state::{ConversionState, Edit, Field};
use tracing::trace;

/// Boundary between the conversion core and whatever displays it
///
/// Implemented by the slint window in the binary and by recording fakes in
/// tests.
pub trait UiPort {
    /// Current `(blender, source)` values as bound to the input fields
    fn read_inputs(&mut self) -> (f32, f32);

    /// Show a settled state
    fn present(&mut self, state: ConversionState);
}

/// Settle `current` against the values captured at the start of the tick
pub fn synchronize(previous: ConversionState, current: ConversionState) -> ConversionState {
    if current.changed(&previous, Field::Source) {
        trace!("Source changed, recomputing Blender value");
        ConversionState {
            blender: source_to_blender(current.source),
            ..current
        }
    } else if current.changed(&previous, Field::Blender) {
        trace!("Blender changed, recomputing Source value");
        ConversionState {
            source: blender_to_source(current.blender),
            ..current
        }
    } else {
        current
    }
}

/// Apply at most one edit to `state` and settle the result
pub fn tick(state: ConversionState, edit: Option<Edit>) -> ConversionState {
    synchronize(state, state.apply(edit))
}

/// Run one tick against a UI port and return the settled state
///
/// `state` is the pair as it was at the end of the previous tick.
pub fn run_tick<P: UiPort + ?Sized>(port: &mut P, state: ConversionState) -> ConversionState {
    let (blender, source) = port.read_inputs();
    let settled = synchronize(state, ConversionState { source, blender });
    port.present(settled);
    settled
}
