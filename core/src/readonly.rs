//! The read-only capability as a type.
//!
//! A [`Readonly<T>`] grants reads of `T` and nothing else. It implements
//! neither `Deref` nor `DerefMut`, and its inner value is not reachable from
//! outside this crate. The only ways back to an owned, mutable `T` are
//! [`as_mut`](crate::as_mut) (checked) and
//! [`as_mut_without_validation`](crate::as_mut_without_validation)
//! (attested, unchecked).
//!
//! Reads are transitive: scalars come back by value, nested containers and
//! objects come back wrapped in `Readonly` again.
//!
//! ```compile_fail
//! use hatch_core::Readonly;
//!
//! let ro = Readonly::new(vec![1, 2, 3]);
//! let _: &Vec<i32> = &*ro;
//! ```
//!
//! ```compile_fail
//! use hatch_core::Readonly;
//!
//! let mut ro = Readonly::new(vec![1, 2, 3]);
//! ro.push(4);
//! ```
//!
//! ```compile_fail
//! use hatch_core::Readonly;
//!
//! let ro = Readonly::new(vec![1, 2, 3]);
//! let _: Vec<i32> = ro.0;
//! ```
//!
//! ```compile_fail
//! use hatch_core::Readonly;
//!
//! let ro = Readonly::new(String::from("x"));
//! let _: String = ro.into_inner();
//! ```

use std::borrow::{Borrow, Cow};
use std::collections::{btree_map, btree_set};
use std::iter::FusedIterator;
use std::slice;

use hatch_types::{ArrayKey, ObjectRef, Value, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Readonly<T>(T);

impl<T> Readonly<T> {
    /// Give up mutation rights. Always allowed.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow a read-only view without consuming the capability.
    #[must_use]
    pub fn as_ref(&self) -> Readonly<&T> {
        Readonly(&self.0)
    }

    pub(crate) fn inner(&self) -> &T {
        &self.0
    }

    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Readonly<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Readonly<&T> {
    /// Clone the viewed value, keeping the read-only capability. Objects inside
    /// the copy are still aliased, so the copy stays read-only.
    #[must_use]
    pub fn cloned(self) -> Readonly<T> {
        Readonly(self.0.clone())
    }
}

impl<B: Borrow<Value>> Readonly<B> {
    fn value(&self) -> &Value {
        self.0.borrow()
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.value().kind()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value().is_null()
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self.value() {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.value() {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.value() {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements, for containers.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.value().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Read-only view of a container element.
    #[must_use]
    pub fn get(&self, key: &ArrayKey) -> Option<Readonly<&Value>> {
        self.value().get(key).map(Readonly)
    }

    /// Membership test: index for sequences, key for dictionaries and keysets.
    #[must_use]
    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        match self.value() {
            Value::Keyset(keys) => keys.contains(key),
            other => other.get(key).is_some(),
        }
    }

    /// Element values of a container, keys ignored. Keyset members are
    /// yielded as scalar values. Non-containers yield nothing.
    #[must_use]
    pub fn elements(&self) -> Elements<'_> {
        let inner = match self.value() {
            Value::Vec(items) => ElementsInner::Vec(items.iter()),
            Value::Dict(entries) => ElementsInner::Dict(entries.values()),
            Value::Keyset(keys) => ElementsInner::Keyset(keys.iter()),
            _ => ElementsInner::Empty,
        };
        Elements { inner }
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.value().as_object().map(ObjectRef::class)
    }

    /// Snapshot of an object property, still read-only.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<Readonly<Value>> {
        self.value()
            .as_object()
            .and_then(|obj| obj.get(name))
            .map(Readonly)
    }
}

pub struct Elements<'a> {
    inner: ElementsInner<'a>,
}

enum ElementsInner<'a> {
    Vec(slice::Iter<'a, Value>),
    Dict(btree_map::Values<'a, ArrayKey, Value>),
    Keyset(btree_set::Iter<'a, ArrayKey>),
    Empty,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Readonly<Cow<'a, Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &mut self.inner {
            ElementsInner::Vec(iter) => Cow::Borrowed(iter.next()?),
            ElementsInner::Dict(iter) => Cow::Borrowed(iter.next()?),
            ElementsInner::Keyset(iter) => Cow::Owned(Value::from(iter.next()?.clone())),
            ElementsInner::Empty => return None,
        };
        Some(Readonly(next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ElementsInner::Vec(iter) => iter.size_hint(),
            ElementsInner::Dict(iter) => iter.size_hint(),
            ElementsInner::Keyset(iter) => iter.size_hint(),
            ElementsInner::Empty => (0, Some(0)),
        }
    }
}

impl FusedIterator for Elements<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_reads() {
        let ro = Readonly::new(Value::from("hi"));
        assert_eq!(ro.as_str(), Some("hi"));
        assert_eq!(ro.as_int(), None);
        assert_eq!(ro.kind(), ValueKind::Str);
        assert!(Readonly::new(Value::Null).is_null());
        assert_eq!(Readonly::new(Value::Float(2.5)).as_float(), Some(2.5));
        assert_eq!(Readonly::new(Value::Bool(true)).as_bool(), Some(true));
    }

    #[test]
    fn nested_reads_stay_readonly() {
        let ro = Readonly::new(Value::from(json!({"x": [1, 2, 3]})));
        let x = ro.get(&ArrayKey::from("x")).unwrap();
        assert_eq!(x.kind(), ValueKind::Vec);
        assert_eq!(x.len(), Some(3));
        assert_eq!(x.get(&ArrayKey::Int(2)).and_then(|v| v.as_int()), Some(3));
        assert!(x.contains_key(&ArrayKey::Int(0)));
        assert!(!x.contains_key(&ArrayKey::Int(3)));
    }

    #[test]
    fn elements_ignore_keys() {
        let ro = Readonly::new(Value::dict([("b", Value::Int(2)), ("a", Value::Int(1))]));
        let ints: Vec<i64> = ro.elements().filter_map(|e| e.as_int()).collect();
        assert_eq!(ints, vec![1, 2]);
    }

    #[test]
    fn keyset_members_are_yielded_as_values() {
        let ro = Readonly::new(Value::keyset([ArrayKey::from(1), ArrayKey::from("k")]));
        let kinds: Vec<ValueKind> = ro.elements().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ValueKind::Int, ValueKind::Str]);
        assert!(ro.contains_key(&ArrayKey::from("k")));
        assert_eq!(ro.elements().size_hint(), (2, Some(2)));
    }

    #[test]
    fn scalars_have_no_elements() {
        let ro = Readonly::new(Value::Int(5));
        assert_eq!(ro.elements().count(), 0);
        assert_eq!(ro.len(), None);
    }

    #[test]
    fn object_props_are_snapshots() {
        let obj = ObjectRef::with_props("Box", [("v", Value::Int(1))]);
        let ro = Readonly::new(Value::Object(obj.clone()));
        let before = ro.prop("v").unwrap();
        obj.set("v", Value::Int(2));
        assert_eq!(before.as_int(), Some(1));
        assert_eq!(ro.prop("v").and_then(|v| v.as_int()), Some(2));
        assert_eq!(ro.class_name(), Some("Box"));
        assert!(ro.prop("missing").is_none());
    }

    #[test]
    fn as_ref_and_cloned_keep_capability() {
        let owned = Readonly::new(Value::vec([Value::Int(1)]));
        let view: Readonly<&Value> = owned.as_ref();
        let copy: Readonly<Value> = view.cloned();
        assert_eq!(copy, owned);
    }
}
