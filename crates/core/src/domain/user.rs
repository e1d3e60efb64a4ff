// Identity types carried by signed tokens

use serde::{Deserialize, Serialize};

/// The subject a token is issued for
///
/// Accepts both `isAdmin` and `is_admin`; the flag defaults to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
    #[serde(rename = "isAdmin", alias = "is_admin", default)]
    pub is_admin: bool,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }
}

/// Claims embedded in a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch (only when a TTL is configured)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
