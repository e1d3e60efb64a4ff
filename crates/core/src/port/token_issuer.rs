// Token Issuer Port (Interface)

use crate::domain::{TokenClaims, UserIdentity};
use crate::error::Result;

/// Signs and verifies identity tokens with a process-wide secret
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed token carrying `username`, `isAdmin` and `iat`
    fn create_token(&self, user: &UserIdentity) -> Result<String>;

    /// Verify signature (and expiry, if present) and return the claims
    fn verify_token(&self, token: &str) -> Result<TokenClaims>;
}
