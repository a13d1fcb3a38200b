//! HS256 bearer tokens.
//!
//! The platform's admin login issues tokens and this service only checks
//! them. [`JwtService::issue`] signs with the same secret so local tooling
//! and tests can produce a token without going through that login.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use crate::auth::Claims;

/// Signing secret and lifetime of issued tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret.
    pub secret: String,
    /// Lifetime of tokens created by [`JwtService::issue`].
    pub token_ttl: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "lingua-dev-secret".to_string(),
            token_ttl: Duration::minutes(15),
        }
    }
}

/// Why a token could not be issued or accepted.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Signing failed or the expiry overflowed.
    #[error("cannot issue token: {0}")]
    Issue(String),

    /// Bad signature, wrong algorithm, missing claims, or not a JWT at all.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// `exp` is in the past.
    #[error("token has expired")]
    Expired,
}

/// Checks (and for tooling, signs) bearer tokens.
#[derive(Clone)]
pub struct JwtService {
    token_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_ttl_secs", &self.token_ttl.num_seconds())
            .field("keys", &"[hidden]")
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Builds a service around one shared secret.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        // Pin the algorithm so a token can't pick its own.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            token_ttl: config.token_ttl,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Signs a token for `subject` valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Issue` if the expiry overflows or signing fails.
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| JwtError::Issue("expiry out of range".to_string()))?;
        let claims = Claims::new(subject, role, expires_at);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Issue(e.to_string()))
    }

    /// Checks a bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` for an expired token and
    /// `JwtError::Invalid` for anything else that fails verification.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })
    }
}
