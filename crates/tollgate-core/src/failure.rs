use serde::Serialize;
use strum::EnumDiscriminants;
use thiserror::Error;

/// A single field-level validation failure
///
/// Produced in detection order by the validation code; that order is
/// preserved all the way to the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending field or parameter
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every failure condition the API boundary can raise
///
/// Each variant is one failure kind; [`FailureKind`](crate::FailureKind)
/// is the payload-free discriminant used for rule lookup. Failures are
/// created at the point of error and consumed exactly once by
/// [`classify`](crate::classify).
#[derive(Debug, Error, EnumDiscriminants)]
#[strum_discriminants(name(FailureKind), vis(pub), derive(Hash))]
pub enum ApiFailure {
    /// No route matched the requested path
    #[error("API not found: {path}")]
    RouteNotFound {
        /// Path the client requested
        path: String,
    },

    /// The request body could not be bound to the handler's input type
    #[error("request binding failed")]
    Bind {
        /// Violations in detection order
        violations: Vec<FieldViolation>,
    },

    /// Declared field-level validation of a bound request failed
    #[error("request validation failed")]
    Validation {
        /// Violations in detection order
        violations: Vec<FieldViolation>,
    },

    /// Programmatic constraint checks on request data failed
    #[error("constraint violation")]
    Constraint {
        /// Violations in detection order
        violations: Vec<FieldViolation>,
    },

    /// A required request parameter was not supplied
    #[error("missing request parameter {name}")]
    MissingParameter {
        /// Name of the absent parameter
        name: String,
    },

    /// The route exists but not for the request's HTTP method
    #[error("request method not supported")]
    MethodNotSupported,

    /// A path or query argument had the wrong type
    #[error("request parameter type mismatch")]
    ArgumentTypeMismatch,

    /// Login with an unknown user or wrong password
    #[error("credential mismatch")]
    CredentialMismatch,

    /// The presented access token is past its expiry
    #[error("access token expired")]
    AccessTokenExpired,

    /// The presented refresh token is past its expiry
    #[error("refresh token expired")]
    RefreshTokenExpired,

    /// Anything the rule table has no entry for
    #[error("{message}")]
    Other {
        /// Best-effort free-text message, possibly empty
        message: String,
    },
}

impl ApiFailure {
    /// Wrap an arbitrary error as an unclassified failure
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Discriminant of this failure
    pub fn kind(&self) -> FailureKind {
        FailureKind::from(self)
    }
}
