//! Typed values held by interactive controls
//!
//! Unlike the payload [`Value`](crate::Value), a control value never coerces:
//! a float slot read through the integer accessor is simply absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value a control slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    Bool,
    Int,
    Float,
    String,
    FloatArray,
    /// One-shot trigger, reported as `true` exactly once
    Trigger,
}

impl ControlKind {
    /// Get the name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Bool => "bool",
            ControlKind::Int => "int",
            ControlKind::Float => "float",
            ControlKind::String => "string",
            ControlKind::FloatArray => "float_array",
            ControlKind::Trigger => "trigger",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control value, tagged by its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    FloatArray(Vec<f64>),
    Trigger(bool),
}

impl ControlValue {
    /// Get the kind of this value
    pub fn kind(&self) -> ControlKind {
        match self {
            ControlValue::Bool(_) => ControlKind::Bool,
            ControlValue::Int(_) => ControlKind::Int,
            ControlValue::Float(_) => ControlKind::Float,
            ControlValue::String(_) => ControlKind::String,
            ControlValue::FloatArray(_) => ControlKind::FloatArray,
            ControlValue::Trigger(_) => ControlKind::Trigger,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ControlValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ControlValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ControlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_float_array(&self) -> Option<&[f64]> {
        match self {
            ControlValue::FloatArray(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_trigger(&self) -> Option<bool> {
        match self {
            ControlValue::Trigger(fired) => Some(*fired),
            _ => None,
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Bool(b) | ControlValue::Trigger(b) => write!(f, "{}", b),
            ControlValue::Int(i) => write!(f, "{}", i),
            ControlValue::Float(fl) => write!(f, "{}", fl),
            ControlValue::String(s) => write!(f, "\"{}\"", s),
            ControlValue::FloatArray(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_value() {
        assert_eq!(ControlValue::Bool(true).kind(), ControlKind::Bool);
        assert_eq!(ControlValue::Int(3).kind(), ControlKind::Int);
        assert_eq!(ControlValue::Float(0.5).kind(), ControlKind::Float);
        assert_eq!(ControlValue::String("a".into()).kind(), ControlKind::String);
        assert_eq!(
            ControlValue::FloatArray(vec![1.0]).kind(),
            ControlKind::FloatArray
        );
        assert_eq!(ControlValue::Trigger(true).kind(), ControlKind::Trigger);
    }

    #[test]
    fn test_no_coercion() {
        assert_eq!(ControlValue::Float(3.0).as_int(), None);
        assert_eq!(ControlValue::Int(3).as_float(), None);
        assert_eq!(ControlValue::Trigger(true).as_bool(), None);
        assert_eq!(ControlValue::Bool(true).as_trigger(), None);
        assert_eq!(ControlValue::Float(3.0).as_float(), Some(3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ControlValue::FloatArray(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(ControlKind::FloatArray.to_string(), "float_array");
    }
}
