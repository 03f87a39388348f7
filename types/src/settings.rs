//! Resolved configuration types shared across crates.
//!
//! Raw TOML structs stay private in `hatch-config`; the loader resolves them
//! into these types at the parse boundary.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown audit policy {0:?} (expected silent, trace or verify)")]
pub struct AuditPolicyParseError(String);

/// What a `Downgrader` records about unchecked downgrades.
///
/// Auditing never changes the outcome: an unchecked downgrade always returns
/// its input.
///
/// Accepted names are `silent` (alias `off`), `trace` and `verify`, exactly as
/// written, whether parsed from TOML or from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AuditPolicy {
    #[default]
    Silent,
    /// Emit a debug event with the attested reason and call site.
    Trace,
    /// Like `Trace`, and warn when the attested value is reference-bearing.
    Verify,
}

impl AuditPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuditPolicy::Silent => "silent",
            AuditPolicy::Trace => "trace",
            AuditPolicy::Verify => "verify",
        }
    }

    #[must_use]
    pub fn records(self) -> bool {
        !matches!(self, AuditPolicy::Silent)
    }
}

impl fmt::Display for AuditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AuditPolicy {
    type Error = AuditPolicyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for AuditPolicy {
    type Err = AuditPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" | "off" => Ok(AuditPolicy::Silent),
            "trace" => Ok(AuditPolicy::Trace),
            "verify" => Ok(AuditPolicy::Verify),
            _ => Err(AuditPolicyParseError(s.to_string())),
        }
    }
}
