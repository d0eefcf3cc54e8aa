//! Check policy configuration.
//!
//! Values are layered: built-in defaults, then the process environment
//! (after loading a `.env` file if one exists), then command-line flags.

use polkassembly_core::FidelityReport;
use thiserror::Error;

/// Environment variable for [`CheckConfig::allow_added_defaults`].
pub const ENV_ALLOW_ADDED_DEFAULTS: &str = "PA_SCHEMA_ALLOW_ADDED_DEFAULTS";
/// Environment variable for [`CheckConfig::allow_unknown_keys`].
pub const ENV_ALLOW_UNKNOWN_KEYS: &str = "PA_SCHEMA_ALLOW_UNKNOWN_KEYS";
/// Environment variable for [`CheckConfig::pretty`].
pub const ENV_PRETTY: &str = "PA_SCHEMA_PRETTY";

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false, 1/0, yes/no, on/off), got '{value}'")]
    InvalidBool { key: String, value: String },
}

/// Policy applied when judging a fidelity report.
///
/// # Example
///
/// ```
/// use polkassembly_cli::CheckConfig;
///
/// let config = CheckConfig::new()
///     .with_allow_unknown_keys(true)
///     .with_pretty(false);
/// assert!(config.allow_added_defaults);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Accept re-encoded payloads that gained keys holding zero values
    pub allow_added_defaults: bool,
    /// Accept payloads carrying keys the schema does not know
    pub allow_unknown_keys: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            allow_added_defaults: true,
            allow_unknown_keys: false,
            pretty: true,
        }
    }
}

impl CheckConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_ALLOW_ADDED_DEFAULTS) {
            config.allow_added_defaults = parse_bool(ENV_ALLOW_ADDED_DEFAULTS, &value)?;
        }
        if let Some(value) = lookup(ENV_ALLOW_UNKNOWN_KEYS) {
            config.allow_unknown_keys = parse_bool(ENV_ALLOW_UNKNOWN_KEYS, &value)?;
        }
        if let Some(value) = lookup(ENV_PRETTY) {
            config.pretty = parse_bool(ENV_PRETTY, &value)?;
        }
        Ok(config)
    }

    /// Accept or reject keys added with zero values.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub const fn with_allow_added_defaults(mut self, allow: bool) -> Self {
        self.allow_added_defaults = allow;
        self
    }

    /// Accept or reject keys unknown to the schema.
    ///
    /// Defaults to `false`.
    #[must_use]
    pub const fn with_allow_unknown_keys(mut self, allow: bool) -> Self {
        self.allow_unknown_keys = allow;
        self
    }

    /// Pretty-print or compact JSON output.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Reasons `report` fails this policy; empty when it passes.
    ///
    /// Changed values and added keys holding real data always fail.
    pub fn violations(&self, report: &FidelityReport) -> Vec<String> {
        let mut reasons = Vec::new();
        for path in &report.changed {
            reasons.push(format!("value changed at {path}"));
        }
        if !self.allow_unknown_keys {
            for path in &report.dropped {
                reasons.push(format!("unknown key dropped at {path}"));
            }
        }
        for added in &report.added {
            if !added.is_default {
                reasons.push(format!("non-default key added at {}", added.path));
            } else if !self.allow_added_defaults {
                reasons.push(format!("default key added at {}", added.path));
            }
        }
        reasons
    }

    /// Whether `report` passes this policy.
    pub fn accepts(&self, report: &FidelityReport) -> bool {
        self.violations(report).is_empty()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
