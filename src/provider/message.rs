use crate::{
    error::Result,
    locale::Locale,
    model::ModelMap,
    provider::{
        file::FileResourceLocator,
        interface::{MessageProvider, ResourceLocator},
    },
    renderer::{RenderContext, RenderStrategy},
};
use log::debug;

/// Message provider combining a resource locator with a render context.
#[derive(Debug, Clone)]
pub struct FileMessageProvider<C = RenderStrategy, L = FileResourceLocator>
where
    C: RenderContext,
    L: ResourceLocator,
{
    context: C,
    locator: L,
    locale: Locale,
}

impl<C: RenderContext, L: ResourceLocator> FileMessageProvider<C, L> {
    /// Creates a provider looking templates up for `locale`.
    pub fn new(context: C, locator: L, locale: Locale) -> Self {
        Self { context, locator, locale }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl<C: RenderContext, L: ResourceLocator> MessageProvider for FileMessageProvider<C, L> {
    fn render_message(&self, name: &str, model: &ModelMap) -> Result<String> {
        self.render_message_for(name, &self.locale, model)
    }

    fn render_message_for(&self, name: &str, locale: &Locale, model: &ModelMap) -> Result<String> {
        let text = self.locator.locate(name, locale)?;
        debug!("Rendering template '{name}' for locale '{locale}' with {} model values", model.len());
        self.context.render(&text, model)
    }
}
