#[cfg(test)]
mod tests {
    use letterpress::renderer::{
        new_render_context, MiniJinjaRenderContext, PlaceholderRenderContext, PlaceholderSyntax,
        RenderContext, Template,
    };
    use letterpress::{Error, Locale, ModelMap};
    use serde::Serialize;
    use serde_json::json;
    use test_log::test;

    fn placeholder(locale: &str) -> PlaceholderRenderContext {
        PlaceholderRenderContext::new(Locale::parse(locale).unwrap()).unwrap()
    }

    fn model(value: serde_json::Value) -> ModelMap {
        ModelMap::try_from(value).unwrap()
    }

    fn test_filter(template: &str, expected: &str) {
        let context = MiniJinjaRenderContext::default();
        let result = context.render(template, &ModelMap::new()).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let context = placeholder("");
        let text = "Dear customer, thank you for your order.";
        let any = model(json!({"a": 1, "b": {"c": "d"}}));
        assert_eq!(context.render(text, &any).unwrap(), text);
        assert_eq!(context.render(text, &ModelMap::new()).unwrap(), text);
    }

    #[test]
    fn simple_placeholder() {
        assert_eq!(placeholder("").render("{a}", &model(json!({"a": "x"}))).unwrap(), "x");
    }

    #[test]
    fn property_path_placeholder() {
        let result = placeholder("").render("{a.b}", &model(json!({"a": {"b": "y"}}))).unwrap();
        assert_eq!(result, "y");
    }

    #[test]
    fn serialized_structs_expose_their_fields() {
        #[derive(Serialize)]
        struct Customer {
            name: String,
            address: Address,
        }
        #[derive(Serialize)]
        struct Address {
            city: String,
        }

        let customer = Customer { name: "Ada".into(), address: Address { city: "London".into() } };
        let model = ModelMap::new().with("customer", customer).unwrap();
        let result = placeholder("")
            .render("{customer.name} lives in {customer.address.city}", &model)
            .unwrap();
        assert_eq!(result, "Ada lives in London");
    }

    #[test]
    fn missing_key_keeps_token_without_default() {
        let result = placeholder("").render("{missing}", &ModelMap::new()).unwrap();
        assert_eq!(result, "{missing}");
    }

    #[test]
    fn missing_key_uses_default_value() {
        let context = placeholder("").with_default_value("N/A");
        assert_eq!(context.render("{missing}", &ModelMap::new()).unwrap(), "N/A");
    }

    #[test]
    fn missing_property_and_null_value_fall_back() {
        let context = placeholder("").with_default_value("-");
        let data = model(json!({"a": {"b": null}}));
        assert_eq!(context.render("[{a.c}]", &data).unwrap(), "[-]");
        assert_eq!(context.render("[{a.b}]", &data).unwrap(), "[-]");
    }

    #[test]
    fn format_uses_culture_decimal_separator() {
        let data = model(json!({"n": 3.1}));
        assert_eq!(placeholder("en-US").render("{n:0.00}", &data).unwrap(), "3.10");
        assert_eq!(placeholder("").render("{n:0.00}", &data).unwrap(), "3.10");
        assert_eq!(placeholder("de-DE").render("{n:0.00}", &data).unwrap(), "3,10");
    }

    #[test]
    fn dates_and_numbers_follow_locale() {
        let data = model(json!({"d": "2026-10-16", "n": 1234.5}));
        let context = placeholder("de-DE");
        assert_eq!(context.render("{d:dd.MM.yyyy}", &data).unwrap(), "16.10.2026");
        assert_eq!(context.render("{d:d}", &data).unwrap(), "16.10.2026");
        assert_eq!(context.render("{n:N2}", &data).unwrap(), "1.234,50");
    }

    #[test]
    fn invalid_format_falls_back() {
        let data = model(json!({"n": 1.5}));
        assert_eq!(placeholder("").render("{n:Z}", &data).unwrap(), "{n:Z}");
        let context = placeholder("").with_default_value("?");
        assert_eq!(context.render("{n:Z}", &data).unwrap(), "?");
    }

    #[test]
    fn rendering_is_idempotent() {
        let context = placeholder("en");
        let template = context.compile("Static text with {unknown} token").unwrap();
        let first = template.render(&ModelMap::new()).unwrap();
        let second = template.render(&ModelMap::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_placeholder_syntax() {
        let syntax = PlaceholderSyntax { opening: '<', closing: '>', format_separator: '|' };
        let context = placeholder("").with_syntax(syntax).unwrap();
        let data = model(json!({"n": 2.5}));
        assert_eq!(context.render("<n|0.0> {n}", &data).unwrap(), "2.5 {n}");
    }

    #[test]
    fn default_render_context_is_placeholder() {
        let context = new_render_context(Locale::invariant()).unwrap();
        assert_eq!(context.render("{a}", &model(json!({"a": 1}))).unwrap(), "1");
    }

    #[test]
    fn minijinja_missing_property_is_visible() {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct ParseTestObject {
            description: String,
        }

        let data = ModelMap::new()
            .with("foo", ParseTestObject { description: "simple".into() })
            .unwrap();
        let context = MiniJinjaRenderContext::default();
        let result = context
            .render("Das ist ein {{ foo.Description }} {{ foo.PascalCaseProperty }} Template", &data)
            .unwrap();
        assert!(result.starts_with("Das ist ein simple "));
        assert!(result.contains("Missing property"));
    }

    #[test]
    fn minijinja_syntax_error() {
        let context = MiniJinjaRenderContext::default();
        assert!(matches!(context.compile("{{ foo }"), Err(Error::TemplateSyntaxError(_))));
    }

    #[test]
    fn test_plural_filter() {
        test_filter("{{ 'car' | plural }}", "cars");
    }

    #[test]
    fn test_singular_filter() {
        test_filter("{{ 'cars' | singular }}", "car");
    }

    #[test]
    fn test_inflect_filter() {
        let context = MiniJinjaRenderContext::default();
        let template = context.compile("{{ count }} {{ 'item' | inflect(count) }}").unwrap();
        assert_eq!(template.render(&model(json!({"count": 1}))).unwrap(), "1 item");
        assert_eq!(template.render(&model(json!({"count": 3}))).unwrap(), "3 items");
    }

    #[test]
    fn test_localized_filter() {
        let context = MiniJinjaRenderContext::new(Locale::parse("en-US").unwrap());
        let data = model(json!({"total": 1234.5}));
        assert_eq!(context.render("{{ total | localized('N2') }}", &data).unwrap(), "1,234.50");
    }

    #[test]
    fn test_cldr_separators_in_placeholders() {
        let data = model(json!({"total": 1234.5}));
        for tag in ["it-IT", "nl-NL", "pt-BR"] {
            assert_eq!(placeholder(tag).render("{total:N2}", &data).unwrap(), "1.234,50", "{tag}");
        }
    }
}
