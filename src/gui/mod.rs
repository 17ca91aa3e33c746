//! GUI module
//!
//! Provides the Slint-based converter window and connects its two input fields
//! to the converter controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
