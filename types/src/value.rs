//! The dynamic value universe inspected by the classifier.
//!
//! The variant set is closed: five scalar kinds, three array-like containers
//! and reference-semantics objects.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::Value as Json;

use crate::{ArrayKey, ObjectRef};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence.
    Vec(Vec<Value>),
    /// Associative mapping.
    Dict(BTreeMap<ArrayKey, Value>),
    /// Set of array keys.
    Keyset(BTreeSet<ArrayKey>),
    Object(ObjectRef),
}

/// Top-level variant of a [`Value`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Vec,
    Dict,
    Keyset,
    Object,
}

impl ValueKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Vec => "vec",
            ValueKind::Dict => "dict",
            ValueKind::Keyset => "keyset",
            ValueKind::Object => "object",
        }
    }

    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueKind::Null | ValueKind::Bool | ValueKind::Int | ValueKind::Float | ValueKind::Str
        )
    }

    /// Array-like containers: sequences, mappings and keysets.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Vec | ValueKind::Dict | ValueKind::Keyset)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    #[must_use]
    pub fn vec(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Vec(items.into_iter().collect())
    }

    #[must_use]
    pub fn dict<K: Into<ArrayKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn keyset<K: Into<ArrayKey>>(keys: impl IntoIterator<Item = K>) -> Self {
        Value::Keyset(keys.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Vec(_) => ValueKind::Vec,
            Value::Dict(_) => ValueKind::Dict,
            Value::Keyset(_) => ValueKind::Keyset,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Element lookup. Sequences are indexed by integer position, mappings
    /// by key. Keysets hold no values and always miss.
    #[must_use]
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        match (self, key) {
            (Value::Vec(items), ArrayKey::Int(i)) => {
                usize::try_from(*i).ok().and_then(|i| items.get(i))
            }
            (Value::Dict(entries), _) => entries.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Vec(items) => Some(items.len()),
            Value::Dict(entries) => Some(entries.len()),
            Value::Keyset(keys) => Some(keys.len()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<ArrayKey> for Value {
    fn from(key: ArrayKey) -> Self {
        match key {
            ArrayKey::Int(i) => Value::Int(i),
            ArrayKey::Str(s) => Value::Str(s),
        }
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Vec(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// JSON objects become string-keyed dictionaries. Integers that fit in `i64`
/// stay integers; every other number becomes a float.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => {
                Value::Vec(items.into_iter().map(Value::from).collect())
            }
            Json::Object(entries) => Value::Dict(
                entries
                    .into_iter()
                    .map(|(k, v)| (ArrayKey::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
