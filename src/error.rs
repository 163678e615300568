use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Template text that the engine refused to compile.
    #[error("Template syntax error: {0}")]
    TemplateSyntaxError(minijinja::Error),

    /// A value could not be formatted with the requested format string.
    #[error("Cannot format value with '{format}': {reason}.")]
    FormatError { format: String, reason: String },

    /// No resource exists for the template at any level of the locale chain.
    #[error(
        "Template '{template_name}' not found for locale '{locale}'. Tried '{}' through '{}'.",
        first_candidate.display(),
        last_candidate.display()
    )]
    ResourceNotFound {
        template_name: String,
        locale: String,
        first_candidate: PathBuf,
        last_candidate: PathBuf,
    },

    /// Rejected at the API boundary before any processing.
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),
}

impl Error {
    pub(crate) fn format(format: &str, reason: impl Into<String>) -> Self {
        Error::FormatError { format: format.to_string(), reason: reason.into() }
    }
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
