//! Utility modules
//!
//! Provides logging initialization and log file rotation.

pub mod logging;

pub use logging::{LogTarget, default_log_dir, init_logging};
