use crate::{format::format_value, locale::Locale};
use cruet::string::{pluralize::to_plural, singularize::to_singular};
use minijinja::{Environment, Error as EngineError, ErrorKind, Value};

/// Picks the word form matching `count`: `{{ 'item' | inflect(count) }}`
/// renders `item` for one and `items` otherwise.
pub fn inflect_filter(word: &str, count: i64) -> String {
    if count == 1 {
        to_singular(word)
    } else {
        to_plural(word)
    }
}

/// Builds the `localized` filter: `{{ total | localized("N2") }}` formats a
/// value the way a `{total:N2}` placeholder would for `locale`.
pub fn localized_filter(
    locale: Locale,
) -> impl Fn(Value, String) -> Result<String, EngineError> + Send + Sync + 'static {
    move |value: Value, format: String| {
        let value = serde_json::to_value(&value).map_err(|e| {
            EngineError::new(ErrorKind::InvalidOperation, format!("cannot format value: {e}"))
        })?;
        format_value(&value, &format, &locale)
            .map_err(|e| EngineError::new(ErrorKind::InvalidOperation, e.to_string()))
    }
}

/// Registers the message filters on `env`.
pub fn register_filters(env: &mut Environment<'static>, locale: &Locale) {
    env.add_filter("plural", to_plural);
    env.add_filter("singular", to_singular);
    env.add_filter("inflect", inflect_filter);
    env.add_filter("localized", localized_filter(locale.clone()));
}
