//! Proof types validated at construction.
//!
//! Once you hold a value of one of these types, you know it satisfies the
//! stated constraint.

use std::fmt;

/// A non-empty `'static` string. Validated at compile time when constructed in
/// a `const` context. Does not trim whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    /// # Panics
    ///
    /// Panics if `value` is empty. In a `const` item this is a compile error.
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for NonEmptyStaticStr {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for NonEmptyStaticStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
