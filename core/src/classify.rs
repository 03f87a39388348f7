//! Value-type classification.
//!
//! A value is *pure* when nothing reachable from it carries identity or shared
//! mutable state: scalars, and array-like containers whose elements are all
//! pure. Anything else is reference-bearing.
//!
//! Classification is total, side-effect free and recomputed on every call.
//! Recursion depth equals the nesting depth of the input; objects are never
//! entered, so self-referencing objects cannot make it loop.

use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use hatch_types::{ArrayKey, ObjectRef, Shape, Value, ValueClass};

use crate::Readonly;

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// Types whose purity this crate knows how to decide.
///
/// Sealed: [`as_mut`](crate::as_mut) trusts the answer, so only the impls in
/// this module exist.
///
/// ```compile_fail
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use hatch_core::{Classify, ValueClass};
///
/// struct Shared(Rc<RefCell<Vec<i32>>>);
///
/// impl Classify for Shared {
///     fn classify(&self) -> ValueClass {
///         ValueClass::PureValue
///     }
/// }
/// ```
pub trait Classify: Sealed {
    fn classify(&self) -> ValueClass;

    /// Type label used in downgrade errors. Domain types name their kind;
    /// other types default to the full Rust type name.
    fn type_label(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl Sealed for Value {}
impl Sealed for ArrayKey {}
impl Sealed for ObjectRef {}
impl Sealed for Shape {}
impl<T: Classify> Sealed for Option<T> {}
impl<T: Classify + ?Sized> Sealed for &T {}
impl<T: Classify + ?Sized> Sealed for Box<T> {}
impl<T: Classify> Sealed for [T] {}
impl<T: Classify> Sealed for Vec<T> {}
impl<T: Classify> Sealed for BTreeSet<T> {}
impl<K, V: Classify> Sealed for BTreeMap<K, V> {}
impl<K, V: Classify, S> Sealed for HashMap<K, V, S> {}

/// Pure iff every element is pure. Stops at the first reference-bearing one.
fn classify_elements<'a, T>(elements: impl IntoIterator<Item = &'a T>) -> ValueClass
where
    T: Classify + ?Sized + 'a,
{
    ValueClass::from_pure(elements.into_iter().all(|e| e.classify().is_pure()))
}

impl Classify for Value {
    fn classify(&self) -> ValueClass {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                ValueClass::PureValue
            }
            Value::Vec(items) => classify_elements(items),
            Value::Dict(entries) => classify_elements(entries.values()),
            // Keyset members are array keys.
            Value::Keyset(_) => ValueClass::PureValue,
            Value::Object(_) => ValueClass::ReferenceBearing,
        }
    }

    fn type_label(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl Classify for ArrayKey {
    fn classify(&self) -> ValueClass {
        ValueClass::PureValue
    }

    fn type_label(&self) -> &'static str {
        match self {
            ArrayKey::Int(_) => "int",
            ArrayKey::Str(_) => "string",
        }
    }
}

impl Classify for ObjectRef {
    fn classify(&self) -> ValueClass {
        ValueClass::ReferenceBearing
    }

    fn type_label(&self) -> &'static str {
        "object"
    }
}

impl Classify for Shape {
    fn classify(&self) -> ValueClass {
        classify_elements(self.values())
    }

    fn type_label(&self) -> &'static str {
        "shape"
    }
}

macro_rules! pure_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl Classify for $ty {
                fn classify(&self) -> ValueClass {
                    ValueClass::PureValue
                }
            }
        )*
    };
}

pure_scalar!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    str,
);

impl<T: Classify> Classify for Option<T> {
    fn classify(&self) -> ValueClass {
        self.as_ref().map_or(ValueClass::PureValue, Classify::classify)
    }

    fn type_label(&self) -> &'static str {
        self.as_ref().map_or("null", Classify::type_label)
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn classify(&self) -> ValueClass {
        (**self).classify()
    }

    fn type_label(&self) -> &'static str {
        (**self).type_label()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn classify(&self) -> ValueClass {
        (**self).classify()
    }

    fn type_label(&self) -> &'static str {
        (**self).type_label()
    }
}

impl<T: Classify> Classify for [T] {
    fn classify(&self) -> ValueClass {
        classify_elements(self)
    }
}

impl<T: Classify> Classify for Vec<T> {
    fn classify(&self) -> ValueClass {
        classify_elements(self)
    }
}

impl<T: Classify> Classify for BTreeSet<T> {
    fn classify(&self) -> ValueClass {
        classify_elements(self)
    }
}

// Mappings are classified by their values only.
impl<K, V: Classify> Classify for BTreeMap<K, V> {
    fn classify(&self) -> ValueClass {
        classify_elements(self.values())
    }
}

impl<K, V: Classify, S> Classify for HashMap<K, V, S> {
    fn classify(&self) -> ValueClass {
        classify_elements(self.values())
    }
}

/// Classify a value seen through the read-only capability.
#[must_use]
pub fn classify<T: Classify>(value: &Readonly<T>) -> ValueClass {
    value.inner().classify()
}

/// Whether a read-only value may be handed out with mutation rights.
#[must_use]
pub fn is_value_type<T: Classify>(value: &Readonly<T>) -> bool {
    classify(value).is_pure()
}
