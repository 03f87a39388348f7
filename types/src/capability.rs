//! Classification outcome and downgrade errors.

use thiserror::Error;

/// Result of classifying a value.
///
/// Computed fresh on every call and never attached to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    /// No mutable reference is reachable from the value; it may be freely
    /// aliased under any capability.
    PureValue,
    /// At least one reachable element carries identity or shared mutable
    /// state.
    ReferenceBearing,
}

impl ValueClass {
    #[must_use]
    pub fn from_pure(pure: bool) -> Self {
        if pure {
            ValueClass::PureValue
        } else {
            ValueClass::ReferenceBearing
        }
    }

    #[must_use]
    pub fn is_pure(self) -> bool {
        matches!(self, ValueClass::PureValue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DowngradeError {
    /// The value may be aliased elsewhere as read-only; granting mutation
    /// rights would break that alias's guarantee.
    #[error("as_mut expects a value type, got {found}")]
    InvalidCapabilityDowngrade { found: &'static str },
}
