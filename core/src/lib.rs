//! Read-only capability checks for Hatch.
//!
//! - [`Readonly`] is the read-only capability as a wrapper type.
//! - [`classify`] decides whether a value is a pure value or reference-bearing.
//! - [`as_mut`] and [`as_mut_without_validation`] are the only ways back from
//!   `Readonly<T>` to `T`.
//! - [`shapes`] reads keyed records without leaving the read-only capability.

mod classify;
mod downgrade;
mod readonly;
pub mod shapes;

#[cfg(test)]
mod test_support;

pub use classify::{Classify, classify, is_value_type};
pub use downgrade::{Downgrader, UncheckedDowngrade, as_mut, as_mut_without_validation};
pub use readonly::{Elements, Readonly};

pub use hatch_types::{
    ArrayKey, AuditPolicy, DowngradeError, ObjectRef, Shape, ShapeError, Value, ValueClass,
    ValueKind,
};
