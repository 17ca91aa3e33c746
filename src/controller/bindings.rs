//! Exact mirror of the two input fields
//!
//! A text field only shows a rounded rendering of its value. Reading the value
//! back from that text would turn the untouched field into a "change" whenever
//! rounding kicks in, and the synchronization rule would then overwrite the
//! user's edit. `FieldBindings` keeps the exact values instead and only replaces
//! one when the user's text parses.

use super::field_text::parse_value;
use crate::units::{ConversionState, Field};
use tracing::trace;

/// Exact values bound to the input fields, plus the field being typed into
#[derive(Debug, Clone, Default)]
pub struct FieldBindings {
    values: ConversionState,
    editing: Option<Field>,
}

impl FieldBindings {
    /// Create bindings showing `state`
    pub fn new(state: ConversionState) -> Self {
        Self {
            values: state,
            editing: None,
        }
    }

    /// Record text typed into `field`
    ///
    /// Marks `field` as being edited. Returns `true` if the text parsed and the
    /// bound value was replaced.
    pub fn edit_text(&mut self, field: Field, text: &str) -> bool {
        self.editing = Some(field);
        match parse_value(text) {
            Some(value) => {
                self.values = self.values.with(field, value);
                true
            }
            None => {
                trace!("Ignoring unparsable {} text: {:?}", field, text);
                false
            }
        }
    }

    /// End the current edit, returning the field that was being edited
    pub fn finish_editing(&mut self) -> Option<Field> {
        self.editing.take()
    }

    /// Focus left `field`
    ///
    /// Ends the edit only if `field` is the one being typed into. Returns `true`
    /// if it was, meaning its text should now be normalized.
    pub fn leave(&mut self, field: Field) -> bool {
        if self.editing == Some(field) {
            self.editing = None;
            true
        } else {
            false
        }
    }

    /// Field the user is currently typing into
    pub fn editing(&self) -> Option<Field> {
        self.editing
    }

    /// Bound values
    pub fn values(&self) -> ConversionState {
        self.values
    }

    /// Bound values as `(blender, source)`, the order the port reports them in
    pub fn inputs(&self) -> (f32, f32) {
        (self.values.blender, self.values.source)
    }

    /// Replace the bound values with a settled state
    pub fn settle(&mut self, state: ConversionState) {
        self.values = state;
    }

    /// Whether the text of `field` should be rewritten when presenting
    pub fn should_render(&self, field: Field) -> bool {
        self.editing != Some(field)
    }
}
