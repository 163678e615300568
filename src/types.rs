//! Common types used across the letterpress crate.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

/// Render engine used for template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// `{path:format}` placeholder substitution.
    #[default]
    Placeholder,
    /// Full MiniJinja templates.
    Minijinja,
}

impl Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Engine::Placeholder => "placeholder",
            Engine::Minijinja => "minijinja",
        };
        write!(f, "{s}")
    }
}
