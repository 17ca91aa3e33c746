//! Configuration module
//!
//! All settings are compiled in. There is no configuration file and nothing is
//! persisted between runs; `AppConfig::default()` is the whole configuration.

pub mod models;

pub use models::{AppConfig, DisplayPreferences, WindowState};
