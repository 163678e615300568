//! Dotted path traversal over model values.

use crate::constants::placeholder::PATH_SEPARATOR;
use serde_json::Value;

/// Outcome of walking a property path.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// The path led to a non-null value.
    Found(&'a Value),
    /// The root or an intermediate value was null.
    Null,
    /// `segment` is not a property of the value it was read from.
    NoSuchProperty { segment: String },
}

/// Reads a single named property from `value`.
///
/// Objects expose their keys (exact and case-sensitive) and arrays expose
/// their decimal indices. Scalars have no properties.
pub fn read_property<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(name),
        Value::Array(items) => name.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Follows `path` from `root`, one property read per dot-separated segment.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Resolution<'a> {
    if root.is_null() {
        return Resolution::Null;
    }
    if path.is_empty() {
        return Resolution::Found(root);
    }

    let mut current = root;
    for segment in path.split(PATH_SEPARATOR) {
        if current.is_null() {
            return Resolution::Null;
        }
        match read_property(current, segment) {
            Some(next) => current = next,
            None => {
                return Resolution::NoSuchProperty { segment: segment.to_string() }
            }
        }
    }

    if current.is_null() {
        Resolution::Null
    } else {
        Resolution::Found(current)
    }
}
