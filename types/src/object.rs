//! Reference-semantics objects.
//!
//! An [`ObjectRef`] is a handle to a shared property table. Cloning the handle
//! aliases the same object, so a write through one clone is observed by every
//! other clone. This is the identity-bearing state that makes a value unsafe
//! to hand out with mutation rights while a read-only alias exists.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Value;

struct ObjectData {
    class: String,
    props: RwLock<BTreeMap<String, Value>>,
}

#[derive(Clone)]
pub struct ObjectRef(Arc<ObjectData>);

impl ObjectRef {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self::with_props::<String>(class, [])
    }

    #[must_use]
    pub fn with_props<K: Into<String>>(
        class: impl Into<String>,
        props: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        let props = props.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self(Arc::new(ObjectData {
            class: class.into(),
            props: RwLock::new(props),
        }))
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.0.class
    }

    /// Snapshot of a property. The returned value is a copy of the property
    /// slot; nested objects inside it remain aliased.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.read().get(name).cloned()
    }

    /// Write a property, visible through every alias of this object.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.write().insert(name.into(), value)
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.write().remove(name)
    }

    #[must_use]
    pub fn prop_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Whether both handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // A property table has no cross-entry invariant, so a poisoned lock is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Value>> {
        self.0.props.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Value>> {
        self.0.props.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Identity equality: two handles are equal iff they alias the same object.
impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Properties are omitted: objects may reference themselves.
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("class", &self.0.class)
            .field("id", &Arc::as_ptr(&self.0))
            .finish()
    }
}
