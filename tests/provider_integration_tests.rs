use letterpress::config::settings::{Overrides, Settings};
use letterpress::provider::{FileMessageProvider, FileResourceLocator, MessageProvider, ResourceLocator};
use letterpress::renderer::{MiniJinjaRenderContext, PlaceholderRenderContext, RenderStrategy};
use letterpress::types::Engine;
use letterpress::{Error, Locale, ModelMap};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use test_log::test;

fn mail_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources/mail_templates")
}

fn german() -> Locale {
    Locale::parse("de-DE").unwrap()
}

fn mail_provider() -> FileMessageProvider<MiniJinjaRenderContext> {
    FileMessageProvider::new(
        MiniJinjaRenderContext::new(german()),
        FileResourceLocator::new(mail_templates()),
        german(),
    )
}

fn order_model() -> ModelMap {
    ModelMap::try_from(json!({
        "customer": {"name": "Ada"},
        "order": {"date": "2026-10-16", "total": 1234.5}
    }))
    .unwrap()
}

#[test]
fn test_load_resource() {
    let message = mail_provider().render_message("Test", &ModelMap::new()).unwrap();
    assert!(message.starts_with("Subject: Testbetreff"));
    assert!(message.contains("Hallo Kunde,"));
}

#[test]
fn test_render_message_without_culture() {
    let message = mail_provider().render_message("TestWithoutCulture", &ModelMap::new()).unwrap();
    assert!(message.starts_with("Subject: TestWithoutCulture"));
}

#[test]
fn test_render_not_existing_resource() {
    let result = mail_provider().render_message("TestNotExistingResource", &ModelMap::new());
    assert!(matches!(result, Err(Error::ResourceNotFound { .. })));
}

#[test]
fn test_render_message_for_other_locale() {
    let model = ModelMap::new().with("recipient", "Ada").unwrap();
    let message = mail_provider()
        .render_message_for("Test", &Locale::parse("fr-FR").unwrap(), &model)
        .unwrap();
    assert!(message.starts_with("Subject: Test subject"));
    assert!(message.contains("Hello Ada,"));
}

#[test]
fn test_placeholder_message_uses_locale() {
    let provider = FileMessageProvider::new(
        RenderStrategy::from(PlaceholderRenderContext::new(german()).unwrap()),
        FileResourceLocator::new(mail_templates()),
        german(),
    );
    let message = provider.render_message("order_shipped", &order_model()).unwrap();
    assert_eq!(
        message,
        "Guten Tag Ada, Ihre Bestellung vom 16.10.2026 über 1.234,50\u{a0}€ ist unterwegs."
    );
}

#[test]
fn test_placeholder_message_for_en_us() {
    let en_us = Locale::parse("en-US").unwrap();
    let provider = FileMessageProvider::new(
        PlaceholderRenderContext::new(en_us.clone()).unwrap(),
        FileResourceLocator::new(mail_templates()),
        en_us,
    );
    let message = provider.render_message("order_shipped", &order_model()).unwrap();
    assert_eq!(message, "Hello Ada, your order from 10/16/2026 for $1,234.50 is on its way.");
}

#[test]
fn test_locale_fallback_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("greet.de-DE.template"), "Guten Tag").unwrap();
    fs::write(temp_dir.path().join("greet.template"), "Hello").unwrap();
    let locator = FileResourceLocator::new(temp_dir.path());

    assert_eq!(locator.locate("greet", &german()).unwrap(), "Guten Tag");
    assert_eq!(locator.locate("greet", &Locale::parse("fr-FR").unwrap()).unwrap(), "Hello");
    assert!(matches!(
        locator.locate("absent", &german()),
        Err(Error::ResourceNotFound { .. })
    ));
}

#[test]
fn test_neutral_culture_resource_is_used() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("greet.de.template"), "Hallo").unwrap();
    fs::write(temp_dir.path().join("greet.template"), "Hello").unwrap();
    let locator = FileResourceLocator::new(temp_dir.path());
    assert_eq!(locator.locate("greet", &Locale::parse("de-AT").unwrap()).unwrap(), "Hallo");
}

#[test]
fn test_settings_build_provider() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("messages");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("greet.txt"), "Hi {name}{suffix}").unwrap();
    fs::write(
        temp_dir.path().join("letterpress.json"),
        r#"{"schemaVersion": "v1", "resource_root": "messages", "template_suffix": ".txt", "default_value": "!"}"#,
    )
    .unwrap();

    let settings = Settings::load(temp_dir.path(), Overrides::default()).unwrap();
    assert_eq!(settings.engine, Engine::Placeholder);
    let provider = settings.message_provider().unwrap();
    let model = ModelMap::new().with("name", "Ada").unwrap();
    assert_eq!(provider.render_message("greet", &model).unwrap(), "Hi Ada!");
}
