//! Closed value representation for structural interpolation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse kind of a [`Value`], used for dispatch and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Numeric leaf.
    Number,
    /// Text leaf (never blended).
    Text,
    /// Ordered sequence.
    Sequence,
    /// Keyed structure.
    Structure,
}

impl ValueKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Sequence => "sequence",
            ValueKind::Structure => "structure",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyframe state value.
///
/// Serialized untagged, so plain JSON objects, arrays, strings and numbers map onto it
/// directly. Booleans and `null` have no representation and fail to deserialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric leaf.
    Number(f64),
    /// Text leaf, e.g. a label or identifier.
    Text(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Mapping of field names to values.
    Structure(BTreeMap<String, Value>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Structure(_) => ValueKind::Structure,
        }
    }

    /// Build a structure from `(key, value)` pairs.
    pub fn structure<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Structure(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Field lookup on a structure; `None` for other kinds or absent keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Structure(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Structure(v)
    }
}
