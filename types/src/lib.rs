//! Core domain types for Hatch.
//!
//! Pure data with no IO: the dynamic value universe, keyed records, the
//! classification outcome and the error kinds surfaced by capability
//! downgrades and shape lookups.

mod capability;
mod key;
mod object;
mod proofs;
mod settings;
mod shape;
mod value;

pub use capability::{DowngradeError, ValueClass};
pub use key::ArrayKey;
pub use object::ObjectRef;
pub use proofs::NonEmptyStaticStr;
pub use settings::{AuditPolicy, AuditPolicyParseError};
pub use shape::{Shape, ShapeError};
pub use value::{Value, ValueKind};
