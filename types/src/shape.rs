//! Keyed records.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{ArrayKey, Value, ValueKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("shape has no field {key}")]
    KeyNotFound { key: ArrayKey },
    #[error("expected a dict-backed shape, got {kind}")]
    NotAShape { kind: ValueKind },
}

/// A fixed-structure record from array keys to heterogeneous values.
///
/// Invariant: a `Shape` is only ever built from key/value entries, so every
/// shape is structurally a dictionary. Converting any other [`Value`] fails
/// with [`ShapeError::NotAShape`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape(BTreeMap<ArrayKey, Value>);

impl Shape {
    #[must_use]
    pub fn new<K: Into<ArrayKey>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &ArrayKey) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_dict(self) -> Value {
        Value::Dict(self.0)
    }
}

impl TryFrom<Value> for Shape {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dict(entries) => Ok(Self(entries)),
            other => Err(ShapeError::NotAShape { kind: other.kind() }),
        }
    }
}

impl From<Shape> for Value {
    fn from(shape: Shape) -> Self {
        shape.into_dict()
    }
}

impl<K: Into<ArrayKey>> FromIterator<(K, Value)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dict_converts_to_shape() {
        let shape = Shape::try_from(Value::dict([("a", Value::Int(1))])).unwrap();
        assert_eq!(shape.get(&ArrayKey::from("a")), Some(&Value::Int(1)));
        assert_eq!(shape.len(), 1);
    }

    #[test]
    fn non_dict_is_rejected() {
        let err = Shape::try_from(Value::vec([Value::Int(1)])).unwrap_err();
        assert_eq!(err, ShapeError::NotAShape { kind: ValueKind::Vec });
        assert_eq!(err.to_string(), "expected a dict-backed shape, got vec");
    }

    #[test]
    fn key_not_found_message_names_key() {
        let err = ShapeError::KeyNotFound {
            key: ArrayKey::from("b"),
        };
        assert_eq!(err.to_string(), "shape has no field 'b'");
    }

    #[test]
    fn round_trips_through_dict() {
        let shape: Shape = [("x", Value::Int(1)), ("y", Value::Int(2))]
            .into_iter()
            .collect();
        let back = Shape::try_from(shape.clone().into_dict()).unwrap();
        assert_eq!(back, shape);
    }
}
