//! HS256 token issuance and validation
//!
//! Access and refresh tokens share one signing key and differ only in
//! TTL and the `use` claim, which prevents a refresh token from being
//! replayed as an access token.

use chrono::Duration;
use jwt_compact::alg::{Hs256, Hs256Key};
use jwt_compact::{AlgorithmExt, Claims, Header, TimeOptions, Token, UntrustedToken, ValidationError};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// What a token is allowed to be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    /// Short-lived token presented on protected routes
    Access,
    /// Long-lived token exchanged for a fresh pair
    Refresh,
}

/// Custom claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Authenticated username
    pub sub: String,
    /// Access/refresh discriminator
    #[serde(rename = "use")]
    pub token_use: TokenUse,
}

/// An access/refresh token pair as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Bearer token for protected routes
    pub access_token: String,
    /// Token accepted only by the refresh endpoint
    pub refresh_token: String,
}

/// Issues and validates signed tokens
pub struct TokenAuthority {
    key: Hs256Key,
    access_ttl: Duration,
    refresh_ttl: Duration,
    time_options: TimeOptions,
}

impl TokenAuthority {
    /// Build an authority from the signing secret and token lifetimes
    ///
    /// Expiry is checked with zero clock leeway.
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            key: Hs256Key::new(secret),
            access_ttl,
            refresh_ttl,
            time_options: TimeOptions::from_leeway(Duration::zero()),
        }
    }

    /// Issue a fresh access/refresh pair for `subject`
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Issuance`] if signing fails
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue(subject, TokenUse::Access, self.access_ttl)?,
            refresh_token: self.issue(subject, TokenUse::Refresh, self.refresh_ttl)?,
        })
    }

    fn issue(&self, subject: &str, token_use: TokenUse, ttl: Duration) -> Result<String, AuthError> {
        let claims = Claims::new(TokenClaims {
            sub: subject.to_owned(),
            token_use,
        })
        .set_duration_and_issuance(&self.time_options, ttl);

        Ok(Hs256.token(&Header::empty(), &claims, &self.key)?)
    }

    /// Validate a raw token and return its claims
    ///
    /// # Errors
    ///
    /// - [`AuthError::Malformed`] / [`AuthError::Invalid`] for tokens that
    ///   fail parsing or signature checks
    /// - [`AuthError::WrongTokenUse`] when the `use` claim does not match
    ///   `expected_use`
    /// - [`AuthError::AccessTokenExpired`] / [`AuthError::RefreshTokenExpired`]
    ///   for structurally valid but expired tokens
    pub fn validate(&self, raw: &str, expected_use: TokenUse) -> Result<TokenClaims, AuthError> {
        let untrusted = UntrustedToken::new(raw)?;
        let token: Token<TokenClaims> = Hs256.validator(&self.key).validate(&untrusted)?;
        let claims = token.claims();

        // Use check first: an expired access token handed to the refresh
        // endpoint is a use error, not a refresh expiry.
        if claims.custom.token_use != expected_use {
            return Err(AuthError::WrongTokenUse);
        }

        match claims.validate_expiration(&self.time_options) {
            Ok(_) => Ok(claims.custom.clone()),
            Err(ValidationError::Expired) => Err(match expected_use {
                TokenUse::Access => AuthError::AccessTokenExpired,
                TokenUse::Refresh => AuthError::RefreshTokenExpired,
            }),
            Err(err) => Err(AuthError::Invalid(err)),
        }
    }
}
