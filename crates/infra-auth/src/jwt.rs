// JWT TokenIssuer Implementation (HS256, shared secret)

use jobly_core::domain::{TokenClaims, UserIdentity};
use jobly_core::error::{AppError, Result};
use jobly_core::port::{TimeProvider, TokenIssuer};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Signing configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub secret: String,
    /// Lifetime in seconds; `None` issues tokens without `exp`
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: None,
        }
    }

    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

pub struct JwtTokenIssuer {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    time_provider: Arc<dyn TimeProvider>,
}

impl JwtTokenIssuer {
    pub fn new(config: TokenConfig, time_provider: Arc<dyn TimeProvider>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
            time_provider,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = self.config.ttl_secs.is_some();
        if validation.validate_exp {
            validation.required_spec_claims.insert("exp".to_string());
        }
        validation
    }
}

fn expiry(iat: i64, ttl_secs: u64) -> Result<i64> {
    i64::try_from(ttl_secs)
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::Config(format!("Token TTL out of range: {}s", ttl_secs)))
}

impl TokenIssuer for JwtTokenIssuer {
    fn create_token(&self, user: &UserIdentity) -> Result<String> {
        let iat = self.time_provider.now_secs();
        let exp = self.config.ttl_secs.map(|ttl| expiry(iat, ttl)).transpose()?;

        let claims = TokenClaims {
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Token(e.to_string()))?;

        debug!(username = %user.username, is_admin = user.is_admin, "Token issued");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| AppError::Token(e.to_string()))?;

        Ok(token_data.claims)
    }
}
