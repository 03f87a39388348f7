//! Read-only to mutable downgrades.
//!
//! Two conversion points exist and both move the value out of its
//! [`Readonly`] wrapper without copying it:
//!
//! - [`as_mut`] classifies the value first and refuses anything that is not a
//!   pure value.
//! - [`as_mut_without_validation`] skips classification. It requires an
//!   [`UncheckedDowngrade`] attestation so every call site names its reason
//!   and can be found by searching for the type.

use std::panic::Location;

use hatch_types::{AuditPolicy, DowngradeError, NonEmptyStaticStr};

use crate::Readonly;
use crate::classify::Classify;

/// Return a read-only value with mutation rights, if it is a pure value.
///
/// The returned value is the input itself, not a copy.
pub fn as_mut<T: Classify>(value: Readonly<T>) -> Result<T, DowngradeError> {
    let inner = value.inner();
    if inner.classify().is_pure() {
        Ok(value.into_inner())
    } else {
        Err(DowngradeError::InvalidCapabilityDowngrade {
            found: inner.type_label(),
        })
    }
}

/// Caller attestation that an unchecked downgrade is sound.
///
/// Build it with [`unchecked_downgrade!`](crate::unchecked_downgrade), which
/// rejects an empty reason at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UncheckedDowngrade {
    reason: NonEmptyStaticStr,
}

impl UncheckedDowngrade {
    /// # Panics
    ///
    /// Panics if `reason` is empty. Inside `const` this is a compile error.
    #[must_use]
    pub const fn attest(reason: &'static str) -> Self {
        Self {
            reason: NonEmptyStaticStr::new(reason),
        }
    }

    #[must_use]
    pub const fn reason(self) -> &'static str {
        self.reason.as_str()
    }
}

/// Attest an unchecked downgrade with a compile-time checked reason.
///
/// ```
/// use hatch_core::{Readonly, as_mut_without_validation, unchecked_downgrade};
///
/// let ro = Readonly::new(vec![1, 2]);
/// let v = as_mut_without_validation(ro, unchecked_downgrade!("built two lines above"));
/// assert_eq!(v, vec![1, 2]);
/// ```
///
/// ```compile_fail
/// use hatch_core::unchecked_downgrade;
///
/// let _ = unchecked_downgrade!("");
/// ```
#[macro_export]
macro_rules! unchecked_downgrade {
    ($reason:expr) => {
        const { $crate::UncheckedDowngrade::attest($reason) }
    };
}

/// Return a read-only value with mutation rights without classifying it.
///
/// Never fails. The caller must guarantee that no other alias can observe a
/// mutation made through the returned value while any read-only alias of it is
/// alive, e.g. because the value was built locally and never shared. Breaking
/// that obligation silently defeats the read-only guarantee; nothing here
/// detects it. Prefer [`as_mut`] unless classification cost is measured.
pub fn as_mut_without_validation<T>(value: Readonly<T>, attestation: UncheckedDowngrade) -> T {
    let _ = attestation;
    value.into_inner()
}

/// Downgrade front end that audits unchecked downgrades per [`AuditPolicy`].
///
/// Auditing only observes. [`Downgrader::checked`] behaves exactly like
/// [`as_mut`], and the unchecked methods always return their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Downgrader {
    audit: AuditPolicy,
}

impl Downgrader {
    #[must_use]
    pub fn new(audit: AuditPolicy) -> Self {
        tracing::debug!(audit = %audit, "Downgrader configured");
        Self { audit }
    }

    #[must_use]
    pub fn audit(&self) -> AuditPolicy {
        self.audit
    }

    pub fn checked<T: Classify>(&self, value: Readonly<T>) -> Result<T, DowngradeError> {
        as_mut(value)
    }

    /// Unchecked downgrade of any `T`. Under `Trace` and `Verify` the
    /// attestation is recorded; no classification happens here, so use
    /// [`Downgrader::unchecked_verified`] to have `Verify` inspect the value.
    #[track_caller]
    pub fn unchecked<T>(&self, value: Readonly<T>, attestation: UncheckedDowngrade) -> T {
        self.record_unchecked(attestation);
        as_mut_without_validation(value, attestation)
    }

    /// Like [`Downgrader::unchecked`], and under `Verify` warns when the
    /// attested value is reference-bearing. Still always returns its input.
    #[track_caller]
    pub fn unchecked_verified<T: Classify>(
        &self,
        value: Readonly<T>,
        attestation: UncheckedDowngrade,
    ) -> T {
        self.record_unchecked(attestation);
        if self.audit == AuditPolicy::Verify && !value.inner().classify().is_pure() {
            tracing::warn!(
                reason = attestation.reason(),
                location = %Location::caller(),
                found = value.inner().type_label(),
                "unchecked downgrade of a reference-bearing value"
            );
        }
        as_mut_without_validation(value, attestation)
    }

    #[track_caller]
    fn record_unchecked(&self, attestation: UncheckedDowngrade) {
        if self.audit.records() {
            tracing::debug!(
                reason = attestation.reason(),
                location = %Location::caller(),
                "unchecked downgrade"
            );
        }
    }
}
