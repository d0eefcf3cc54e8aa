//! CLI-specific error types and mappings.
//!
//! Maps codec, configuration and IO failures to exit codes and user-facing
//! messages.

use polkassembly_core::CodecError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more payloads failed the check policy.
    #[error("{0}")]
    CheckFailed(String),

    /// Argument error (unknown schema kind, bad path, ...).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Payload could not be parsed or decoded.
    #[error("Invalid payload: {0}")]
    Payload(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Check failed
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CheckFailed(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Payload(_) => 65,  // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CodecError> for CliError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::UnknownType(name) => Self::Arguments(format!(
                "unknown schema kind '{name}' (run `pa-schema types` for the list)"
            )),
            other => Self::Payload(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::CheckFailed("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Payload("x".into()).exit_code(), 65);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_unknown_kind_is_usage_error() {
        let err = CliError::from(CodecError::UnknownType("postt".to_string()));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("postt"));
    }

    #[test]
    fn test_codec_error_is_payload_error() {
        let err = CliError::from(CodecError::EmptyBody);
        assert!(matches!(err, CliError::Payload(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = CliError::from(ConfigError::InvalidBool {
            key: "PA_SCHEMA_PRETTY".to_string(),
            value: "nope".to_string(),
        });
        assert_eq!(err.exit_code(), 78);
    }
}
