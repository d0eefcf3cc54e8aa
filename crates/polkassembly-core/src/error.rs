//! Error types for the API schema.
//!
//! `ApiError` is the server's own error envelope and travels on the wire like
//! any other DTO. `CodecError` covers everything that can go wrong at the
//! boundary where raw response bodies become typed records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for decode/encode operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Error envelope returned by the API on failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Machine-oriented error code or short description
    #[serde(rename = "error", deserialize_with = "crate::wire::null_as_default")]
    pub error_message: String,
    /// Human-readable message
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub message: String,
}

impl ApiError {
    /// Create an envelope carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            error_message: String::new(),
            message: message.into(),
        }
    }

    /// The text surfaced to callers: `message` when set, otherwise `error`.
    pub fn message_or_error(&self) -> &str {
        if self.message.is_empty() {
            &self.error_message
        } else {
            &self.message
        }
    }

    /// Whether neither field carries any text.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.error_message.is_empty()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_or_error())
    }
}

impl std::error::Error for ApiError {}

/// Errors raised while turning raw bodies into DTOs and back.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The API answered with its error envelope.
    #[error("API error (status {status}): {error}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Decoded error envelope
        error: ApiError,
    },

    /// Non-success response whose body is not an error envelope.
    #[error("HTTP status {status}: {body}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Raw body text (lossy UTF-8)
        body: String,
    },

    /// Body is not valid JSON for the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Success response without a body where a record was expected.
    #[error("Empty response body")]
    EmptyBody,

    /// Schema name not present in the registry.
    #[error("Unknown schema type '{0}'")]
    UnknownType(String),

    /// Parameters that cannot be rendered as query pairs.
    #[error("Cannot render query parameters: {0}")]
    InvalidQuery(String),
}

impl CodecError {
    /// HTTP status carried by the error, if it came from a response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
