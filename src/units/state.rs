//! Conversion state value types

use std::fmt;

/// One of the two values shown in the converter window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Value in Blender units
    Blender,
    /// Value in Source engine units
    Source,
}

impl Field {
    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            Field::Blender => "Blender",
            Field::Source => "Source",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-supplied value for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edit {
    /// Field the user typed into
    pub field: Field,
    /// New value of that field
    pub value: f32,
}

impl Edit {
    /// Create a new edit
    pub fn new(field: Field, value: f32) -> Self {
        Self { field, value }
    }
}

/// The same quantity expressed in both unit systems
///
/// Once a tick has settled, `source == blender_to_source(blender)` up to
/// floating-point rounding. Starts at `(0.0, 0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionState {
    /// Value in Source engine units
    pub source: f32,
    /// Value in Blender units
    pub blender: f32,
}

impl ConversionState {
    /// Create a state from both values as-is, without synchronizing them
    pub fn new(source: f32, blender: f32) -> Self {
        Self { source, blender }
    }

    /// Read one field
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::Blender => self.blender,
            Field::Source => self.source,
        }
    }

    /// Copy of this state with one field replaced
    #[must_use]
    pub fn with(self, field: Field, value: f32) -> Self {
        match field {
            Field::Blender => Self {
                blender: value,
                ..self
            },
            Field::Source => Self {
                source: value,
                ..self
            },
        }
    }

    /// Copy of this state with the edit applied, or unchanged for `None`
    #[must_use]
    pub fn apply(self, edit: Option<Edit>) -> Self {
        match edit {
            Some(edit) => self.with(edit.field, edit.value),
            None => self,
        }
    }

    /// Whether `field` differs from the same field in `previous`
    ///
    /// Compares bit patterns: an unedited NaN is not a change, while
    /// `0.0 -> -0.0` is.
    pub fn changed(&self, previous: &Self, field: Field) -> bool {
        self.get(field).to_bits() != previous.get(field).to_bits()
    }

    /// Bitwise equality of both fields
    pub fn bit_eq(&self, other: &Self) -> bool {
        !self.changed(other, Field::Source) && !self.changed(other, Field::Blender)
    }
}
