/// Handles argument parsing and command dispatch.
pub mod cli;

/// Configuration handling for letterpress.
pub mod config;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Locale-aware formatting of model values.
pub mod format;

/// A set of helpers for reading models.
pub mod ioutils;

/// Locale identifiers and fallback chains.
pub mod locale;

/// Named values handed to templates.
pub mod model;

/// Localized template messages and the resources they come from.
pub mod provider;

/// Template rendering functionality.
pub mod renderer;

/// Property path resolution over model values.
pub mod resolver;

/// Common types.
pub mod types;

pub use error::{Error, Result};
pub use locale::Locale;
pub use model::ModelMap;
pub use provider::{FileMessageProvider, FileResourceLocator, MessageProvider, ResourceLocator};
pub use renderer::{RenderContext, RenderStrategy, Template};
