use std::collections::BTreeMap;

use ndarray::ArrayD;

use crate::{PolicyErr, Result};

/// A single value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(ArrayD<f32>),
    Byte(ArrayD<u8>),
    Text(String),
}

impl Value {
    /// A short name of the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Float(_) => "a float array",
            Value::Byte(_) => "a byte array",
            Value::Text(_) => "text",
        }
    }
}

impl From<ArrayD<f32>> for Value {
    fn from(a: ArrayD<f32>) -> Self {
        Value::Float(a)
    }
}

impl From<ArrayD<u8>> for Value {
    fn from(a: ArrayD<u8>) -> Self {
        Value::Byte(a)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// A string keyed mapping of arrays and text, the shape in which examples travel between the
/// dataset, the policy and the robot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Returns a new empty `Record`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder flavoured [`Record::insert`].
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets the value at `key`.
    ///
    /// # Errors
    /// `PolicyErr::MissingKey` if the record has no such key.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| PolicyErr::MissingKey {
            key: key.to_string(),
        })
    }

    /// Gets the float array at `key`.
    ///
    /// # Errors
    /// If the key is missing or holds anything other than a float array.
    pub fn require_float(&self, key: &str) -> Result<&ArrayD<f32>> {
        match self.require(key)? {
            Value::Float(a) => Ok(a),
            other => Err(unexpected(key, "a float array", other)),
        }
    }

    /// Gets the text at `key`, `Ok(None)` when the key is absent.
    ///
    /// # Errors
    /// If the key is present but does not hold text.
    pub fn optional_text(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Text(s)) => Ok(Some(s)),
            Some(other) => Err(unexpected(key, "text", other)),
        }
    }

    /// Gets the float array at `key`, `Ok(None)` when the key is absent.
    ///
    /// # Errors
    /// If the key is present but does not hold a float array.
    pub fn optional_float(&self, key: &str) -> Result<Option<&ArrayD<f32>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Float(a)) => Ok(Some(a)),
            Some(other) => Err(unexpected(key, "a float array", other)),
        }
    }
}

fn unexpected(key: &str, expected: &'static str, got: &Value) -> PolicyErr {
    PolicyErr::UnexpectedType {
        key: key.to_string(),
        expected,
        got: got.kind(),
    }
}
