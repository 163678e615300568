//! Locale-aware text conversion of model values.
//!
//! The module is structured as:
//! - `culture`: separators, patterns and names per culture
//! - `number`: standard and custom numeric format strings
//! - `date`: date recognition and date format strings

pub mod culture;
pub mod date;
pub mod number;

pub use culture::{culture_for, Culture};
pub use date::DateValue;
pub use number::Number;

use crate::{error::Result, locale::Locale};
use serde_json::Value;

/// Text form of a value when no format string is given.
///
/// Strings are returned verbatim, numbers and booleans in their invariant
/// form, null as empty text, arrays and objects as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats `value` with `format` using the conventions of `locale`.
///
/// Numbers take numeric format strings and strings holding a date take date
/// format strings. Every other value ignores the format and falls back to
/// [`display_value`]. An empty format is the same as no format.
pub fn format_value(value: &Value, format: &str, locale: &Locale) -> Result<String> {
    if format.is_empty() {
        return Ok(display_value(value));
    }
    let culture = culture_for(locale);
    match value {
        Value::Number(n) => match Number::from_json(n) {
            Some(number) => number::format_number(number, format, &culture),
            None => Ok(display_value(value)),
        },
        Value::String(s) => match DateValue::parse(s) {
            Some(date) => date::format_date(&date, format, &culture),
            None => Ok(s.clone()),
        },
        other => Ok(display_value(other)),
    }
}
