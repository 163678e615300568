//! The named values handed to a render call.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Ordered, string-keyed container of the values available to a template.
///
/// Values are kept as a [`serde_json::Value`] tree, so any `Serialize` type
/// can be inserted and its serialized fields become the properties a
/// placeholder path can read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModelMap {
    values: IndexMap<String, Value>,
}

impl ModelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `value` and stores it under `key`, replacing any previous value.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        K: Into<String>,
        V: Serialize,
    {
        let value = serde_json::to_value(value)?;
        self.insert_value(key, value)
    }

    /// Stores an already converted value under `key`.
    pub fn insert_value<K: Into<String>>(&mut self, key: K, value: Value) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidArgument("model keys must not be empty".into()));
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Builder form of [`ModelMap::insert`].
    pub fn with<K, V>(mut self, key: K, value: V) -> Result<Self>
    where
        K: Into<String>,
        V: Serialize,
    {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl TryFrom<Value> for ModelMap {
    type Error = Error;

    /// Builds a model from a JSON object; any other JSON value is rejected.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let mut model = ModelMap::new();
                for (key, value) in map {
                    model.insert_value(key, value)?;
                }
                Ok(model)
            }
            other => Err(Error::InvalidArgument(format!(
                "a model must be a JSON object, got '{other}'"
            ))),
        }
    }
}
