use crate::error::{Error, Result};
use crate::model::ModelMap;

/// A prepared template that can be rendered any number of times.
pub trait Template {
    /// Renders the template with the given model.
    ///
    /// # Arguments
    /// * `model` - Named values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, model: &ModelMap) -> Result<String>;
}

/// Trait for render contexts, the owners of rendering configuration.
pub trait RenderContext {
    /// Template type produced by [`RenderContext::compile`].
    type Template<'ctx>: Template
    where
        Self: 'ctx;

    /// Prepares template text for rendering.
    ///
    /// # Arguments
    /// * `text` - Template text, must not be empty
    ///
    /// # Returns
    /// * `Result<Self::Template<'_>>` - Template bound to this context
    fn compile<'ctx>(&'ctx self, text: &str) -> Result<Self::Template<'ctx>>;

    /// Compiles and renders template text in one call.
    ///
    /// # Arguments
    /// * `text` - Template text, must not be empty
    /// * `model` - Named values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, text: &str, model: &ModelMap) -> Result<String> {
        self.compile(text)?.render(model)
    }
}

/// Rejects empty template text before any processing.
pub(crate) fn ensure_template_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::InvalidArgument("template text must not be empty".into()));
    }
    Ok(())
}
