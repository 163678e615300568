use crate::{
    error::Result,
    locale::Locale,
    model::ModelMap,
    renderer::{
        interface::{RenderContext, Template},
        minijinja::{MiniJinjaRenderContext, MiniJinjaTemplate},
        placeholder::{PlaceholderRenderContext, PlaceholderTemplate},
    },
    types::Engine,
};
use log::warn;

/// The render strategies letterpress ships with.
#[derive(Debug, Clone)]
pub enum RenderStrategy {
    Placeholder(PlaceholderRenderContext),
    MiniJinja(MiniJinjaRenderContext),
}

impl RenderStrategy {
    /// Builds the strategy for `engine`.
    ///
    /// # Arguments
    /// * `engine` - Which render context to build
    /// * `locale` - Locale used for formatting
    /// * `default_value` - Fallback text for unresolved placeholders
    ///
    /// # Returns
    /// * `Result<Self>` - The configured strategy
    pub fn from_settings(
        engine: Engine,
        locale: Locale,
        default_value: Option<String>,
    ) -> Result<Self> {
        match engine {
            Engine::Placeholder => {
                let mut context = PlaceholderRenderContext::new(locale)?;
                context.set_default_value(default_value);
                Ok(Self::Placeholder(context))
            }
            Engine::Minijinja => {
                if default_value.is_some() {
                    warn!("The minijinja engine ignores the configured default value");
                }
                Ok(Self::MiniJinja(MiniJinjaRenderContext::new(locale)))
            }
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            Self::Placeholder(_) => Engine::Placeholder,
            Self::MiniJinja(_) => Engine::Minijinja,
        }
    }

    pub fn locale(&self) -> &Locale {
        match self {
            Self::Placeholder(context) => context.locale(),
            Self::MiniJinja(context) => context.locale(),
        }
    }
}

impl From<PlaceholderRenderContext> for RenderStrategy {
    fn from(context: PlaceholderRenderContext) -> Self {
        Self::Placeholder(context)
    }
}

impl From<MiniJinjaRenderContext> for RenderStrategy {
    fn from(context: MiniJinjaRenderContext) -> Self {
        Self::MiniJinja(context)
    }
}

/// A template compiled by one of the [`RenderStrategy`] variants.
#[derive(Debug)]
pub enum CompiledTemplate<'ctx> {
    Placeholder(PlaceholderTemplate<'ctx>),
    MiniJinja(MiniJinjaTemplate),
}

impl Template for CompiledTemplate<'_> {
    fn render(&self, model: &ModelMap) -> Result<String> {
        match self {
            Self::Placeholder(template) => template.render(model),
            Self::MiniJinja(template) => template.render(model),
        }
    }
}

impl RenderContext for RenderStrategy {
    type Template<'ctx> = CompiledTemplate<'ctx>;

    fn compile<'ctx>(&'ctx self, text: &str) -> Result<CompiledTemplate<'ctx>> {
        match self {
            Self::Placeholder(context) => context.compile(text).map(CompiledTemplate::Placeholder),
            Self::MiniJinja(context) => context.compile(text).map(CompiledTemplate::MiniJinja),
        }
    }

    fn render(&self, text: &str, model: &ModelMap) -> Result<String> {
        match self {
            Self::Placeholder(context) => context.render(text, model),
            Self::MiniJinja(context) => context.render(text, model),
        }
    }
}
