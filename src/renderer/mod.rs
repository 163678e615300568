//! Template rendering for letterpress
//!
//! This module turns template text and a model into a message.
//!
//! The module is structured as:
//! - `interface`: Core trait definitions for render contexts and templates
//! - `placeholder`: Built-in `{path:format}` placeholder substitution
//! - `minijinja`: MiniJinja-based implementation of the render context
//! - `filters`: Custom filters for the MiniJinja environment
//! - `strategy`: Closed set of render contexts selectable at run time

pub mod filters;
pub mod interface;
pub mod minijinja;
pub mod placeholder;
pub mod strategy;

// Re-export the main types and traits for convenience
pub use interface::{RenderContext, Template};
pub use minijinja::{MiniJinjaRenderContext, MiniJinjaTemplate};
pub use placeholder::{PlaceholderRenderContext, PlaceholderSyntax, PlaceholderTemplate, PlaceholderToken};
pub use strategy::{CompiledTemplate, RenderStrategy};

/// Convenience function to create the default render context
pub fn new_render_context(locale: crate::locale::Locale) -> crate::error::Result<RenderStrategy> {
    PlaceholderRenderContext::new(locale).map(RenderStrategy::Placeholder)
}
