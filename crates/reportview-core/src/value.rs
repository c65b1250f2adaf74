//! Dynamic payload values carried by elements
//!
//! The core treats element payloads as opaque. These types exist so a payload
//! can travel through frames intact and be read back when a control is seeded
//! or an element rendered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A dynamic payload value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// Nested payload, e.g. a chart spec
    Map(ValueMap),
}

/// Payload entries keyed by name, in the order the backend wrote them
pub type ValueMap = IndexMap<String, Value>;

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Read a number as a float
    ///
    /// Integers widen; the backend does not always tell `3` from `3.0`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            Value::Int(i) => Some(i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read a list whose entries are all numeric
    ///
    /// Used for slider ranges; any non-numeric entry makes the whole read fail.
    pub fn as_float_list(&self) -> Option<Vec<f64>> {
        match self {
            Value::List(items) => items.iter().map(Value::as_float).collect(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reads() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::Int(42).as_float(), Some(42.0));
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(Value::Null.as_bool(), None);
    }

    #[test]
    fn test_float_list() {
        let v: Value = vec![Value::Int(1), Value::Float(2.5)].into();
        assert_eq!(v.as_float_list(), Some(vec![1.0, 2.5]));

        let mixed: Value = vec![Value::Int(1), Value::from("x")].into();
        assert_eq!(mixed.as_float_list(), None);
        assert_eq!(Value::Float(1.0).as_float_list(), None);
    }

    #[test]
    fn test_nested_payload() {
        let mut spec = ValueMap::new();
        spec.insert("mark".into(), "bar".into());
        let v = Value::from(spec.clone());
        assert_eq!(v, Value::Map(spec));
    }
}
