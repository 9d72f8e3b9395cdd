#![allow(clippy::must_use_candidate)]

//! Credential verification and access/refresh token lifecycle

mod error;
mod token;

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

pub use error::AuthError;
pub use token::{TokenAuthority, TokenClaims, TokenPair, TokenUse};

/// Verifies credentials and drives the token lifecycle
pub struct Authenticator {
    users: HashMap<String, SecretString>,
    tokens: TokenAuthority,
}

impl Authenticator {
    /// Build an authenticator over a fixed user set
    pub fn new(users: HashMap<String, SecretString>, tokens: TokenAuthority) -> Self {
        Self { users, tokens }
    }

    /// Exchange credentials for a token pair
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialMismatch`] for an unknown user or a
    /// wrong password; the two cases are deliberately indistinguishable.
    pub fn login(&self, username: &str, password: &str) -> Result<TokenPair, AuthError> {
        let known = self
            .users
            .get(username)
            .is_some_and(|stored| stored.expose_secret() == password);

        if known {
            self.tokens.issue_pair(username)
        } else {
            Err(AuthError::CredentialMismatch)
        }
    }

    /// Exchange a refresh token for a fresh pair
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RefreshTokenExpired`] for expired refresh
    /// tokens, and the validation error otherwise
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.tokens.validate(refresh_token, TokenUse::Refresh)?;
        self.tokens.issue_pair(&claims.sub)
    }

    /// Validate an access token and return the authenticated username
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccessTokenExpired`] for expired access
    /// tokens, and the validation error otherwise
    pub fn verify_access(&self, access_token: &str) -> Result<String, AuthError> {
        let claims = self.tokens.validate(access_token, TokenUse::Access)?;
        Ok(claims.sub)
    }

    /// Configured usernames, sorted for stable output
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.keys().cloned().collect();
        names.sort();
        names
    }
}
