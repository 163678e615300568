use super::filters::register_filters;
use crate::{
    constants::engine::{MISSING_PROPERTY_MARKER, TEMPLATE_NAME},
    error::{Error, Result},
    locale::Locale,
    model::ModelMap,
    renderer::interface::{ensure_template_text, RenderContext, Template},
};
use log::debug;
use minijinja::value::{Enumerator, Object, Value};
use minijinja::Environment;
use std::sync::Arc;

/// MiniJinja-based render context.
#[derive(Debug, Clone)]
pub struct MiniJinjaRenderContext {
    /// MiniJinja environment instance, cloned for every compiled template
    env: Environment<'static>,
    /// Locale used by the `localized` filter
    locale: Locale,
}

impl MiniJinjaRenderContext {
    /// Creates a new MiniJinjaRenderContext with the custom filters registered.
    pub fn new(locale: Locale) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, &locale);
        Self { env, locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Default for MiniJinjaRenderContext {
    fn default() -> Self {
        Self::new(Locale::invariant())
    }
}

impl RenderContext for MiniJinjaRenderContext {
    type Template<'ctx> = MiniJinjaTemplate;

    fn compile<'ctx>(&'ctx self, text: &str) -> Result<MiniJinjaTemplate> {
        ensure_template_text(text)?;
        let mut env = self.env.clone();
        env.add_template_owned(TEMPLATE_NAME, text.to_string())
            .map_err(Error::TemplateSyntaxError)?;
        debug!("Compiled a template of {} bytes with MiniJinja", text.len());
        Ok(MiniJinjaTemplate { env })
    }
}

/// A template compiled by MiniJinja, owning its environment.
#[derive(Debug)]
pub struct MiniJinjaTemplate {
    env: Environment<'static>,
}

impl Template for MiniJinjaTemplate {
    fn render(&self, model: &ModelMap) -> Result<String> {
        let context = register_model(model);
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(context)?)
    }
}

/// Text rendered in place of a property that `owner` does not declare.
fn missing_property(name: &str, owner: &str) -> String {
    format!("[{MISSING_PROPERTY_MARKER} '{name}' on '{owner}']")
}

/// A model value handed to the engine, exposing exactly its declared properties.
#[derive(Debug)]
struct RegisteredObject {
    path: String,
    properties: serde_json::Map<String, serde_json::Value>,
    /// The model itself: unknown names stay undefined instead of becoming markers.
    root: bool,
}

impl RegisteredObject {
    fn child_path(&self, name: &str) -> String {
        if self.root {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        }
    }
}

impl Object for RegisteredObject {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;
        match self.properties.get(name) {
            Some(value) => Some(register_value(value, &self.child_path(name))),
            None if self.root => None,
            None => {
                debug!("'{}' declares no property '{name}'", self.path);
                Some(Value::from(missing_property(name, &self.path)))
            }
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(self.properties.keys().map(|k| Value::from(k.as_str())).collect())
    }
}

fn register_value(value: &serde_json::Value, path: &str) -> Value {
    match value {
        serde_json::Value::Object(properties) => Value::from_object(RegisteredObject {
            path: path.to_string(),
            properties: properties.clone(),
            root: false,
        }),
        serde_json::Value::Array(items) => Value::from(
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| register_value(item, &format!("{path}.{idx}")))
                .collect::<Vec<_>>(),
        ),
        scalar => Value::from_serialize(scalar),
    }
}

/// Registers the model's values with the engine for a single render call.
fn register_model(model: &ModelMap) -> Value {
    Value::from_object(RegisteredObject {
        path: String::new(),
        properties: model.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        root: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct ParseTestObject {
        description: String,
    }

    fn context() -> MiniJinjaRenderContext {
        MiniJinjaRenderContext::default()
    }

    #[test]
    fn renders_simple_values() {
        let model = ModelMap::new().with("value", "simple").unwrap();
        let result = context().render("This is a {{ value }} template", &model).unwrap();
        assert_eq!(result, "This is a simple template");
    }

    #[test]
    fn renders_declared_properties() {
        let model = ModelMap::new()
            .with("foo", ParseTestObject { description: "simple".into() })
            .unwrap();
        let ctx = context();
        let template = ctx.compile("This is a {{ foo.Description }} template").unwrap();
        assert_eq!(template.render(&model).unwrap(), "This is a simple template");
    }

    #[test]
    fn undeclared_property_renders_marker() {
        let model = ModelMap::new()
            .with("foo", ParseTestObject { description: "simple".into() })
            .unwrap();
        let result = context()
            .render("This is a {{ foo.Description }} {{ foo.PascalCaseProperty }} template", &model)
            .unwrap();
        assert!(result.contains(MISSING_PROPERTY_MARKER));
        assert_eq!(
            result,
            "This is a simple [Missing property 'PascalCaseProperty' on 'foo'] template"
        );
    }

    #[test]
    fn property_names_are_case_sensitive() {
        let model = ModelMap::new()
            .with("foo", ParseTestObject { description: "simple".into() })
            .unwrap();
        let result = context().render("{{ foo.description }}", &model).unwrap();
        assert_eq!(result, "[Missing property 'description' on 'foo']");
    }

    #[test]
    fn nested_paths_are_registered() {
        let model = ModelMap::try_from(json!({"order": {"customer": {"name": "Ada"}}})).unwrap();
        let ctx = context();
        assert_eq!(ctx.render("{{ order.customer.name }}", &model).unwrap(), "Ada");
        assert_eq!(
            ctx.render("{{ order.customer.email }}", &model).unwrap(),
            "[Missing property 'email' on 'order.customer']"
        );
    }

    #[test]
    fn unknown_variables_render_empty() {
        assert_eq!(context().render("[{{ nothing }}]", &ModelMap::new()).unwrap(), "[]");
    }

    #[test]
    fn loops_over_registered_lists() {
        let model = ModelMap::try_from(json!({"items": [{"sku": "A1"}, {"sku": "B2"}]})).unwrap();
        let result = context()
            .render("{% for item in items %}{{ item.sku }};{% endfor %}", &model)
            .unwrap();
        assert_eq!(result, "A1;B2;");
    }

    #[test]
    fn syntax_errors_surface_on_compile() {
        let err = context().compile("{{ foo }").unwrap_err();
        assert!(matches!(err, Error::TemplateSyntaxError(_)));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(context().compile(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn localized_filter_uses_context_locale() {
        let model = ModelMap::new().with("total", 1234.5).unwrap();
        let ctx = MiniJinjaRenderContext::new(Locale::parse("de-DE").unwrap());
        assert_eq!(ctx.render("{{ total | localized('N2') }}", &model).unwrap(), "1.234,50");
    }

    #[test]
    fn inflection_filters_are_available() {
        let model = ModelMap::new().with("count", 2).unwrap();
        assert_eq!(
            context().render("{{ 'parcel' | inflect(count) }}, {{ 'boxes' | singular }}", &model).unwrap(),
            "parcels, box"
        );
    }
}
