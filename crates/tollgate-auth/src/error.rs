use thiserror::Error;
use tollgate_core::ApiFailure;

/// Authentication and token errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user or wrong password
    #[error("incorrect username or password")]
    CredentialMismatch,

    /// Access token past its expiry
    #[error("access token has expired")]
    AccessTokenExpired,

    /// Refresh token past its expiry
    #[error("refresh token has expired")]
    RefreshTokenExpired,

    /// Token could not be parsed as a JWT
    #[error("malformed token")]
    Malformed(#[from] jwt_compact::ParseError),

    /// Signature or claims check failed
    #[error("token validation failed")]
    Invalid(#[from] jwt_compact::ValidationError),

    /// Access token presented where a refresh token is required, or vice versa
    #[error("token is not valid for this operation")]
    WrongTokenUse,

    /// Signing a new token failed
    #[error("token issuance failed")]
    Issuance(#[from] jwt_compact::CreationError),
}

impl From<AuthError> for ApiFailure {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::CredentialMismatch => Self::CredentialMismatch,
            AuthError::AccessTokenExpired => Self::AccessTokenExpired,
            AuthError::RefreshTokenExpired => Self::RefreshTokenExpired,
            other => Self::other(other.to_string()),
        }
    }
}
