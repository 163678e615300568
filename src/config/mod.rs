//! Configuration management for letterpress
//!
//! This module contains the configuration system components:
//! - `loader`: Configuration file loading, parsing and validation
//! - `settings`: Effective settings after command-line overrides

pub mod loader;
pub mod settings;

// Re-export commonly used types for convenience
pub use loader::{Config, ConfigV1};
pub use settings::Settings;
