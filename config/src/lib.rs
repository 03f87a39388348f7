//! Configuration loading for Hatch.
//!
//! ```toml
//! [downgrade]
//! audit = "trace"   # silent | trace | verify
//! ```
//!
//! Raw TOML structs (all `Option`) stay private; [`HatchConfig`] is the
//! resolved form with defaults applied.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use hatch_core::Downgrader;
use hatch_types::AuditPolicy;

/// Environment variable overriding `downgrade.audit`.
pub const AUDIT_ENV_VAR: &str = "HATCH_AUDIT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    downgrade: Option<RawDowngradeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDowngradeConfig {
    audit: Option<AuditPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DowngradeConfig {
    audit: AuditPolicy,
}

impl DowngradeConfig {
    #[must_use]
    pub fn audit(&self) -> AuditPolicy {
        self.audit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HatchConfig {
    downgrade: DowngradeConfig,
}

impl From<RawConfig> for HatchConfig {
    fn from(raw: RawConfig) -> Self {
        let downgrade = raw.downgrade.unwrap_or_default();
        Self {
            downgrade: DowngradeConfig {
                audit: downgrade.audit.unwrap_or_default(),
            },
        }
    }
}

impl HatchConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Self::from)
    }

    /// Load from `path`. A missing file resolves to the defaults. Failures
    /// are returned, not logged.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            audit = %config.downgrade.audit,
            "Config loaded"
        );
        Ok(config)
    }

    /// Load `~/.hatch/config.toml`, then apply environment overrides.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config = match Self::path() {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".hatch").join("config.toml"))
    }

    /// Apply `HATCH_AUDIT` if it is set.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_audit_override(env::var(AUDIT_ENV_VAR).ok().as_deref())
    }

    /// Apply an audit override. Unparseable values are ignored with a warning.
    #[must_use]
    pub fn with_audit_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match raw.parse::<AuditPolicy>() {
            Ok(audit) => self.downgrade.audit = audit,
            Err(err) => tracing::warn!("Ignoring {AUDIT_ENV_VAR}: {err}"),
        }
        self
    }

    #[must_use]
    pub fn downgrade(&self) -> DowngradeConfig {
        self.downgrade
    }

    #[must_use]
    pub fn downgrader(&self) -> Downgrader {
        Downgrader::new(self.downgrade.audit)
    }
}
