//! Converter controller implementation
//!
//! Owns the conversion state between ticks and drives the synchronization rule
//! against a [`UiPort`].

use super::field_text::format_value;
use crate::config::{AppConfig, DisplayPreferences};
use crate::units::{ConversionState, Field, UiPort, run_tick};
use tracing::debug;

/// Converter logic controller
pub struct ConverterController {
    /// Settled state at the end of the last tick
    state: ConversionState,
    /// How values are formatted for the fields
    display: DisplayPreferences,
    /// Number of ticks run so far
    tick_count: u64,
}

impl ConverterController {
    /// Create a controller starting at `(0.0, 0.0)`
    pub fn new(config: &AppConfig) -> Self {
        Self::with_state(config, ConversionState::default())
    }

    /// Create a controller starting at a given state
    pub fn with_state(config: &AppConfig, state: ConversionState) -> Self {
        Self {
            state,
            display: config.display.clone(),
            tick_count: 0,
        }
    }

    /// Settled state at the end of the last tick
    pub fn state(&self) -> ConversionState {
        self.state
    }

    /// Number of ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Text shown for `field` in the current state
    pub fn display_text(&self, field: Field) -> String {
        format_value(self.state.get(field), self.display.decimal_places)
    }

    /// Run one tick against `port` and return the settled state
    pub fn handle_tick<P: UiPort + ?Sized>(&mut self, port: &mut P) -> ConversionState {
        let previous = self.state;
        self.state = run_tick(port, previous);
        self.tick_count += 1;

        if self.state.bit_eq(&previous) {
            debug!("Tick {}: no change", self.tick_count);
        } else {
            debug!(
                "Tick {}: blender {} -> {}, source {} -> {}",
                self.tick_count,
                previous.blender,
                self.state.blender,
                previous.source,
                self.state.source
            );
        }

        self.state
    }
}
