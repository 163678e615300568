//! `{path.to.value:format}` substitution with a silent fallback policy.

use crate::{
    constants::placeholder::{CLOSING, FORMAT_SEPARATOR, OPENING, PATH_SEPARATOR},
    error::{Error, Result},
    format::format_value,
    locale::Locale,
    model::ModelMap,
    renderer::interface::{ensure_template_text, RenderContext, Template},
    resolver::{self, Resolution},
};
use log::debug;
use regex::{Captures, Regex};

/// Delimiters of a placeholder and the separator introducing its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSyntax {
    pub opening: char,
    pub closing: char,
    pub format_separator: char,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self { opening: OPENING, closing: CLOSING, format_separator: FORMAT_SEPARATOR }
    }
}

impl PlaceholderSyntax {
    fn validate(&self) -> Result<()> {
        let chars = [self.opening, self.closing, self.format_separator];
        for (idx, ch) in chars.iter().enumerate() {
            if *ch == PATH_SEPARATOR || ch.is_whitespace() {
                return Err(Error::InvalidArgument(format!(
                    "'{ch}' cannot be used in placeholder syntax"
                )));
            }
            if chars[idx + 1..].contains(ch) {
                return Err(Error::InvalidArgument(format!(
                    "'{ch}' is used twice in placeholder syntax"
                )));
            }
        }
        Ok(())
    }

    /// `OPEN([^CLOSE]+)CLOSE`
    fn pattern(&self) -> Result<Regex> {
        let opening = regex::escape(&self.opening.to_string());
        let closing = regex::escape(&self.closing.to_string());
        Regex::new(&format!("{opening}([^{closing}]+){closing}"))
            .map_err(|e| Error::InvalidArgument(format!("invalid placeholder syntax: {e}")))
    }
}

/// One parsed `{root.path:format}` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// Model key.
    pub root_name: String,
    /// Dot-separated path below the root value, possibly empty.
    pub remaining_path: String,
    /// Format string, empty when absent.
    pub format: String,
}

impl PlaceholderToken {
    /// Parses the text between the delimiters.
    pub fn parse(body: &str, syntax: &PlaceholderSyntax) -> Self {
        let body: String = body.chars().filter(|c| *c != syntax.opening).collect();
        let (path, format) = match body.split_once(syntax.format_separator) {
            Some((path, format)) => (path, format),
            None => (body.as_str(), ""),
        };
        // a leading dot does not start a path
        let (root_name, remaining_path) = match path.find(PATH_SEPARATOR) {
            Some(idx) if idx > 0 => (&path[..idx], &path[idx + 1..]),
            _ => (path, ""),
        };
        Self {
            root_name: root_name.to_string(),
            remaining_path: remaining_path.to_string(),
            format: format.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum Unresolved {
    #[error("'{0}' is not in the model")]
    MissingRoot(String),
    #[error("no property '{0}'")]
    NoSuchProperty(String),
    #[error("value is null")]
    Null,
    #[error(transparent)]
    Format(Error),
}

/// Render context substituting placeholders with model values.
///
/// Placeholders that cannot be resolved or formatted are replaced by the
/// default value, or left untouched when no default value is configured.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderContext {
    locale: Locale,
    default_value: Option<String>,
    syntax: PlaceholderSyntax,
    pattern: Regex,
}

impl PlaceholderRenderContext {
    /// Creates a context formatting values for `locale` with the default syntax.
    pub fn new(locale: Locale) -> Result<Self> {
        let syntax = PlaceholderSyntax::default();
        let pattern = syntax.pattern()?;
        Ok(Self { locale, default_value: None, syntax, pattern })
    }

    /// Replaces unresolvable placeholders with `default_value` instead of
    /// leaving them as they are.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_syntax(mut self, syntax: PlaceholderSyntax) -> Result<Self> {
        syntax.validate()?;
        self.pattern = syntax.pattern()?;
        self.syntax = syntax;
        Ok(self)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn set_default_value(&mut self, default_value: Option<String>) {
        self.default_value = default_value;
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    fn render_text(&self, text: &str, model: &ModelMap) -> Result<String> {
        ensure_template_text(text)?;
        debug!(
            "Replacing every match of '{}' in a template of {} bytes",
            self.pattern.as_str(),
            text.len()
        );
        let rendered = self
            .pattern
            .replace_all(text, |caps: &Captures<'_>| self.substitute(&caps[0], &caps[1], model));
        Ok(rendered.into_owned())
    }

    fn substitute(&self, token: &str, body: &str, model: &ModelMap) -> String {
        let placeholder = PlaceholderToken::parse(body, &self.syntax);
        debug!(
            "Resolving placeholder '{}' (path '{}', format '{}')",
            placeholder.root_name, placeholder.remaining_path, placeholder.format
        );
        match self.resolve(&placeholder, model) {
            Ok(text) => text,
            Err(reason) => {
                debug!("Placeholder {token} could not be replaced: {reason}. Using fallback.");
                self.default_value.clone().unwrap_or_else(|| token.to_string())
            }
        }
    }

    fn resolve(
        &self,
        placeholder: &PlaceholderToken,
        model: &ModelMap,
    ) -> Result<String, Unresolved> {
        let root = model
            .get(&placeholder.root_name)
            .ok_or_else(|| Unresolved::MissingRoot(placeholder.root_name.clone()))?;
        let value = match resolver::resolve(root, &placeholder.remaining_path) {
            Resolution::Found(value) => value,
            Resolution::Null => return Err(Unresolved::Null),
            Resolution::NoSuchProperty { segment } => {
                return Err(Unresolved::NoSuchProperty(segment))
            }
        };
        format_value(value, &placeholder.format, &self.locale).map_err(Unresolved::Format)
    }
}

/// Template text bound to the [`PlaceholderRenderContext`] that compiled it.
///
/// Rendering uses the context's configuration at render time.
#[derive(Debug, Clone)]
pub struct PlaceholderTemplate<'ctx> {
    text: String,
    context: &'ctx PlaceholderRenderContext,
}

impl Template for PlaceholderTemplate<'_> {
    fn render(&self, model: &ModelMap) -> Result<String> {
        self.context.render_text(&self.text, model)
    }
}

impl RenderContext for PlaceholderRenderContext {
    type Template<'ctx> = PlaceholderTemplate<'ctx>;

    fn compile<'ctx>(&'ctx self, text: &str) -> Result<PlaceholderTemplate<'ctx>> {
        ensure_template_text(text)?;
        Ok(PlaceholderTemplate { text: text.to_string(), context: self })
    }

    fn render(&self, text: &str, model: &ModelMap) -> Result<String> {
        self.render_text(text, model)
    }
}
