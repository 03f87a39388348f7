//! Read-only accessors over shapes.
//!
//! None of these change capability: inputs and outputs are both read-only,
//! so no classification is needed.

use std::borrow::Borrow;

use hatch_types::{ArrayKey, Shape, ShapeError, Value};

use crate::Readonly;

static NULL: Value = Value::Null;

/// `shape[key]` if present, otherwise `default`. A missing shape yields
/// `default` as well. Never fails.
#[must_use]
pub fn idx<'a>(
    shape: Option<Readonly<&'a Shape>>,
    key: &ArrayKey,
    default: Readonly<&'a Value>,
) -> Readonly<&'a Value> {
    shape
        .and_then(|shape| shape.into_inner().get(key))
        .map_or(default, Readonly::new)
}

/// [`idx`] with a null default.
#[must_use]
pub fn idx_or_null<'a>(shape: Option<Readonly<&'a Shape>>, key: &ArrayKey) -> Readonly<&'a Value> {
    idx(shape, key, Readonly::new(&NULL))
}

/// `shape[key]`, failing with [`ShapeError::KeyNotFound`] when absent.
pub fn at<'a>(shape: Readonly<&'a Shape>, key: &ArrayKey) -> Result<Readonly<&'a Value>, ShapeError> {
    shape
        .into_inner()
        .get(key)
        .map(Readonly::new)
        .ok_or_else(|| ShapeError::KeyNotFound { key: key.clone() })
}

#[must_use]
pub fn key_exists(shape: Readonly<&Shape>, key: &ArrayKey) -> bool {
    shape.inner().contains_key(key)
}

/// Keys of a shape. Keys are scalars, so they are handed out directly.
pub fn keys<'a>(shape: Readonly<&'a Shape>) -> impl Iterator<Item = &'a ArrayKey> {
    shape.into_inner().keys()
}

/// Identity. The shape keeps its read-only capability.
#[must_use]
pub fn to_record<S: Borrow<Shape>>(shape: Readonly<S>) -> Readonly<S> {
    shape
}

/// Re-validate a read-only value as a dict-backed shape.
///
/// Fails with [`ShapeError::NotAShape`] for anything but a dictionary. The
/// result is a fresh shape holding the same entries; objects inside it stay
/// aliased, so it stays read-only.
pub fn to_dict<B: Borrow<Value>>(value: Readonly<B>) -> Result<Readonly<Shape>, ShapeError> {
    let value: &Value = value.inner().borrow();
    match value {
        Value::Dict(entries) => Ok(Readonly::new(
            entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        )),
        other => Err(ShapeError::NotAShape { kind: other.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_types::{ObjectRef, ValueKind};

    fn shape() -> Shape {
        Shape::new([("a", Value::Int(1)), ("b", Value::Null)])
    }

    #[test]
    fn idx_returns_present_field() {
        let s = shape();
        let fallback = Value::Int(99);
        let got = idx(Some(Readonly::new(&s)), &ArrayKey::from("a"), Readonly::new(&fallback));
        assert_eq!(got.as_int(), Some(1));
    }

    #[test]
    fn idx_returns_default_for_missing_key() {
        let s = Shape::new([("a", Value::Int(1))]);
        let fallback = Value::Int(99);
        let got = idx(Some(Readonly::new(&s)), &ArrayKey::from("b"), Readonly::new(&fallback));
        assert_eq!(got.as_int(), Some(99));
    }

    #[test]
    fn idx_present_null_is_not_replaced_by_default() {
        let s = shape();
        let fallback = Value::Int(99);
        let got = idx(Some(Readonly::new(&s)), &ArrayKey::from("b"), Readonly::new(&fallback));
        assert!(got.is_null());
    }

    #[test]
    fn idx_without_shape_yields_default() {
        let fallback = Value::from("d");
        let got = idx(None, &ArrayKey::from("a"), Readonly::new(&fallback));
        assert_eq!(got.as_str(), Some("d"));
    }

    #[test]
    fn idx_or_null_yields_null_when_missing() {
        let s = shape();
        assert!(idx_or_null(Some(Readonly::new(&s)), &ArrayKey::from("zz")).is_null());
        assert_eq!(idx_or_null(Some(Readonly::new(&s)), &ArrayKey::from("a")).as_int(), Some(1));
    }

    #[test]
    fn at_returns_present_field() {
        let s = shape();
        let got = at(Readonly::new(&s), &ArrayKey::from("a")).unwrap();
        assert_eq!(got.as_int(), Some(1));
    }

    #[test]
    fn at_fails_on_missing_key() {
        let s = Shape::new([("a", Value::Int(1))]);
        let err = at(Readonly::new(&s), &ArrayKey::from("b")).unwrap_err();
        assert_eq!(err, ShapeError::KeyNotFound { key: ArrayKey::from("b") });
    }

    #[test]
    fn key_exists_and_keys() {
        let s = shape();
        assert!(key_exists(Readonly::new(&s), &ArrayKey::from("b")));
        assert!(!key_exists(Readonly::new(&s), &ArrayKey::Int(0)));
        let names: Vec<&ArrayKey> = keys(Readonly::new(&s)).collect();
        assert_eq!(names, vec![&ArrayKey::from("a"), &ArrayKey::from("b")]);
    }

    #[test]
    fn to_record_is_identity() {
        let s = shape();
        let ro = Readonly::new(s.clone());
        assert_eq!(to_record(ro), Readonly::new(s));
    }

    #[test]
    fn to_dict_accepts_dicts() {
        let v = Value::dict([("x", Value::vec([Value::Int(1)]))]);
        let ro = to_dict(Readonly::new(&v)).unwrap();
        assert!(key_exists(ro.as_ref(), &ArrayKey::from("x")));
    }

    #[test]
    fn to_dict_rejects_other_containers() {
        let err = to_dict(Readonly::new(Value::vec([]))).unwrap_err();
        assert_eq!(err, ShapeError::NotAShape { kind: ValueKind::Vec });
        let err = to_dict(Readonly::new(Value::keyset(["a"]))).unwrap_err();
        assert_eq!(err, ShapeError::NotAShape { kind: ValueKind::Keyset });
    }

    #[test]
    fn to_dict_keeps_objects_aliased() {
        let obj = ObjectRef::new("C");
        let v = Value::dict([("o", Value::Object(obj.clone()))]);
        let ro = to_dict(Readonly::new(v)).unwrap();
        let field = at(ro.as_ref(), &ArrayKey::from("o")).unwrap();
        obj.set("n", Value::Int(3));
        assert_eq!(field.prop("n").and_then(|n| n.as_int()), Some(3));
    }
}
