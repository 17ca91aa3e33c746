//! Error types for the unit converter
//!
//! The conversion core cannot fail. Everything in here belongs to startup and
//! the window lifecycle: logging setup, window creation and the event loop.
//!
//! Error variants use `#[source]` to preserve error chains so the log shows the
//! underlying platform error.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the unit converter
#[derive(Debug, Error)]
pub enum HlrUnitsError {
    /// The window or its rendering backend could not be created
    #[error("Failed to create window: {0}")]
    WindowCreation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The GUI event loop failed while running
    #[error("Event loop error: {0}")]
    EventLoop(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The logging system could not be initialized
    #[error("Logging error: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, HlrUnitsError>;

/// Convert an error to a user-friendly message for the fatal error dialog
pub fn get_user_friendly_error(error: &HlrUnitsError) -> String {
    match error {
        HlrUnitsError::WindowCreation(e) => {
            format!(
                "Unable to open the converter window:\n\n{e}\n\n\
                 Please ensure:\n\
                 - Your graphics drivers are up to date\n\
                 - A display server is available"
            )
        }
        HlrUnitsError::EventLoop(e) => {
            format!(
                "The window stopped unexpectedly:\n\n{e}\n\n\
                 Try restarting the application."
            )
        }
        HlrUnitsError::Logging(_) => "Failed to set up logging.\n\n\
             The converter itself is unaffected.\n\
             Check that you have write permissions to the log directory."
            .to_string(),
        HlrUnitsError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
    }
}
