//! `HLR Units` - Blender <-> Source engine unit converter
//!
//! Opens a single fixed-size window with a Blender field and a Source field.
//! Editing either one recomputes the other.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use hlr_units::{
    config::AppConfig,
    error::{HlrUnitsError, get_user_friendly_error},
    units::SOURCE_UNITS_PER_BLENDER_UNIT,
    utils::{self, LogTarget},
};
use gui::GuiController;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, creates the converter window and runs the event loop.
/// Logging, window or event loop failures are reported to the user and exit
/// with status 1.
fn main() -> Result<()> {
    // No subscriber yet, so report straight to the user
    if let Err(e) =
        utils::init_logging(LogTarget::for_build()).context("Failed to initialize logging system")
    {
        show_error_and_exit(&user_message(&e));
        return Err(e);
    }

    info!("HLR Units v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "1 Blender unit = {} Source units",
        SOURCE_UNITS_PER_BLENDER_UNIT
    );

    let config = AppConfig::default();

    let gui_controller = match GuiController::new(&config).context("Failed to create converter window")
    {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to create window: {:#}", e);
            show_error_and_exit(&user_message(&e));
            return Err(e);
        }
    };

    info!("Starting GUI event loop");
    if let Err(e) = gui_controller
        .run()
        .context("GUI event loop terminated with error")
    {
        error!("GUI event loop failed: {:#}", e);
        show_error_and_exit(&user_message(&e));
        return Err(e);
    }

    info!("HLR Units shutting down");

    Ok(())
}

/// Message for the fatal error dialog
fn user_message(error: &anyhow::Error) -> String {
    if let Some(hlr_error) = error.downcast_ref::<HlrUnitsError>() {
        get_user_friendly_error(hlr_error)
    } else {
        format!("{error:#}")
    }
}

/// Shows an error dialog and exits the application.
#[cfg(windows)]
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("HLR Units - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}

/// Shows an error dialog and exits the application (non-Windows fallback).
#[cfg(not(windows))]
fn show_error_and_exit(message: &str) {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
