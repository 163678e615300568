use crate::{error::Result, locale::Locale, model::ModelMap};

/// Trait for finding the raw text of a named template.
pub trait ResourceLocator {
    /// Finds the text of `name` for the most specific level of `locale`'s chain.
    ///
    /// # Arguments
    /// * `name` - Template name, without locale tag or suffix
    /// * `locale` - Requested locale
    ///
    /// # Returns
    /// * `Result<String>` - Full text of the first resource found
    fn locate(&self, name: &str, locale: &Locale) -> Result<String>;
}

/// Trait for producing messages from named templates.
pub trait MessageProvider {
    /// Renders the template `name` with the provider's locale.
    fn render_message(&self, name: &str, model: &ModelMap) -> Result<String>;

    /// Renders the template `name`, looking it up for `locale` instead of the
    /// provider's locale.
    fn render_message_for(&self, name: &str, locale: &Locale, model: &ModelMap) -> Result<String>;
}
