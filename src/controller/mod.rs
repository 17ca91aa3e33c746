//! Converter controller module
//!
//! This module sits between the window and the unit conversion core.
//!
//! # Overview
//!
//! - **`ConverterController`** owns the `ConversionState` for the lifetime of the
//!   window and advances it one tick per user edit
//! - **`FieldBindings`** mirrors the two input fields the way a widget bound to a
//!   float would: exact values, updated only when the typed text parses
//! - **`field_text`** converts between field text and values
//!
//! # Event Flow
//!
//! ```text
//! LineEdit edited → FieldBindings::edit_text → ConverterController::handle_tick
//!                                                      ↓
//!                                   UiPort::present → other field's text
//! ```
//!
//! The field being typed into keeps the user's raw text until editing finishes,
//! so a half-typed value like `1.` is not rewritten to `1.000` under the cursor.

pub mod bindings;
pub mod converter_controller;
pub mod field_text;

pub use bindings::FieldBindings;
pub use converter_controller::ConverterController;
pub use field_text::{format_value, parse_value};
