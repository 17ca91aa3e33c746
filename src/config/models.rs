//! Configuration data models
//!
//! This module defines the compiled-in settings of the converter window.

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Window geometry
    pub window: WindowState,
    /// How values are shown in the input fields
    pub display: DisplayPreferences,
}

/// Window size in logical pixels; the window is not resizable
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Window width
    pub width: f32,
    /// Window height
    pub height: f32,
}

/// Display formatting preferences
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPreferences {
    /// Digits after the decimal point in both fields
    pub decimal_places: usize,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 90.0,
        }
    }
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self { decimal_places: 3 }
    }
}
