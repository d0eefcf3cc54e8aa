//! Authentication and account-management payloads.
//!
//! Only the record shapes live here; signing and token handling belong to the
//! HTTP client that sends them.

use serde::{Deserialize, Serialize};

use super::users::User;

// ============================================================================
// Web3 (wallet) login
// ============================================================================

/// Wallet-signature login request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3AuthRequest {
    /// Signing address
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub address: String,
    /// Signature over the login message
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub signature: String,
    /// Wallet extension name (e.g. "polkadot-js", "talisman")
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub wallet: String,
    /// The signed message, when the server did not issue it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

/// Response to a successful wallet login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3AuthResponse {
    /// Session token
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// Web2 (email/password) login
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web2LoginRequest {
    #[serde(rename = "emailOrUsername", deserialize_with = "crate::wire::null_as_default")]
    pub email_or_username: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web2LoginResponse {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web2SignupRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web2SignupResponse {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetPasswordRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub email: String,
}

// ============================================================================
// QR session login
// ============================================================================

/// A pending QR login session issued by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrSessionResponse {
    #[serde(rename = "sessionId", deserialize_with = "crate::wire::null_as_default")]
    pub session_id: String,
    /// QR payload (data URL or raw string, as issued)
    #[serde(rename = "qrCode", deserialize_with = "crate::wire::null_as_default")]
    pub qr_code: String,
}

/// Claim a QR session from a signed-in device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimQrSessionRequest {
    #[serde(rename = "sessionId", deserialize_with = "crate::wire::null_as_default")]
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// ============================================================================
// Profile editing
// ============================================================================

/// Partial profile update; unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditUserDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(
        rename = "publicSocialLinks",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub public_social_links: Vec<PublicSocialLink>,
}

/// A link shown on a public profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicSocialLink {
    /// Platform name (e.g. "x", "github")
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub url: String,
}
