//! Keyword arguments handed over to the image simulation
//!
//! A [Kwargs] map is keyed by parameter name, numbers and strings are serialized as is
//! so the map reads like a plain Python dictionary once pickled.

use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Configuration parameter value
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Float(f64),
    Integer(u32),
    Text(String),
}
impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Integer(value) => Some(*value as f64),
            Value::Text(_) => None,
        }
    }
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value)
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Parameter name to value map
pub type Kwargs = BTreeMap<String, Value>;

/// Merges 2 maps into a new one, the entries of `second` take precedence
pub fn merge(first: &Kwargs, second: &Kwargs) -> Kwargs {
    let mut kwargs = first.clone();
    kwargs.extend(second.iter().map(|(k, v)| (k.clone(), v.clone())));
    kwargs
}
