//! Fields that tolerate unexpected JSON shapes
//!
//! Exported bots are not always well-formed: a `children` entry may be an object
//! instead of an array, a `commandName` may be a number, a value may be an explicit
//! `null`. A [`Lenient`] field parses into its expected type when it can and keeps
//! the original JSON otherwise, so a single odd node never fails the whole document
//! and is written back exactly as it was read.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Lenient<T> {
    /// The key was absent; nothing is written back
    Missing,
    Parsed(T),
    /// Present but not of the expected shape, including `null`
    Raw(Value),
}

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Lenient::Missing
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Parsed(value)
    }
}

impl<T> Lenient<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Lenient::Missing)
    }

    pub fn parsed(&self) -> Option<&T> {
        match self {
            Lenient::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn parsed_mut(&mut self) -> Option<&mut T> {
        match self {
            Lenient::Parsed(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match T::deserialize(&value) {
            Ok(parsed) => Lenient::Parsed(parsed),
            Err(_) => Lenient::Raw(value),
        })
    }
}

impl<T: Serialize> Serialize for Lenient<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Lenient::Parsed(value) => value.serialize(serializer),
            Lenient::Raw(value) => value.serialize(serializer),
            Lenient::Missing => serializer.serialize_none(),
        }
    }
}

/// JavaScript truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
