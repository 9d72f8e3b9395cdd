//! The rule table: one translation rule per failure kind, exact-match
//! lookup, explicit fallback.
//!
//! Codes and message shapes are a published wire contract and must not
//! change meaning once released. The fixed-message rules (1005-1009)
//! deliberately ignore the payload of the failure instance they match;
//! the user-facing text for those kinds is decoupled from whatever
//! detail the failure carries.

use crate::envelope::ResultEnvelope;
use crate::failure::{ApiFailure, FailureKind};

/// Separator between joined violation messages (full-width, not a comma)
pub const VIOLATION_SEPARATOR: &str = "、";

/// How a rule turns the matched failure into a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageStrategy {
    /// `"API not found: "` + requested path
    RequestPath,
    /// Violation messages joined with [`VIOLATION_SEPARATOR`], input order
    JoinViolations,
    /// `"Missing request parameter "` + parameter name
    ParameterName,
    /// Static text, payload ignored
    Fixed(&'static str),
    /// The failure's own message text, empty if it has none
    OwnMessage,
}

/// A single translation rule: failure kind, wire code, message strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    kind: Option<FailureKind>,
    code: &'static str,
    strategy: MessageStrategy,
}

impl Rule {
    /// Stable wire code of this rule
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Kind this rule matches; `None` for the fallback
    pub const fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// Apply the message strategy to a failure
    ///
    /// Total over all inputs: a strategy handed a payload it cannot read
    /// renders the empty string instead of panicking.
    fn message(&self, failure: &ApiFailure) -> String {
        match (self.strategy, failure) {
            (MessageStrategy::RequestPath, ApiFailure::RouteNotFound { path }) => {
                format!("API not found: {path}")
            }
            (
                MessageStrategy::JoinViolations,
                ApiFailure::Bind { violations }
                | ApiFailure::Validation { violations }
                | ApiFailure::Constraint { violations },
            ) => violations
                .iter()
                .map(|violation| violation.message.as_str())
                .collect::<Vec<_>>()
                .join(VIOLATION_SEPARATOR),
            (MessageStrategy::ParameterName, ApiFailure::MissingParameter { name }) => {
                format!("Missing request parameter {name}")
            }
            (MessageStrategy::Fixed(text), _) => text.to_owned(),
            (MessageStrategy::OwnMessage, ApiFailure::Other { message }) => message.clone(),
            (MessageStrategy::OwnMessage, other) => other.to_string(),
            // Mismatched rule and payload: render nothing rather than fail
            _ => String::new(),
        }
    }
}

/// The translation table, fixed at compile time
///
/// Exactly one entry per known kind, so lookup order carries no
/// precedence semantics.
static RULES: &[Rule] = &[
    Rule {
        kind: Some(FailureKind::RouteNotFound),
        code: "1001",
        strategy: MessageStrategy::RequestPath,
    },
    Rule {
        kind: Some(FailureKind::Bind),
        code: "1002",
        strategy: MessageStrategy::JoinViolations,
    },
    Rule {
        kind: Some(FailureKind::Validation),
        code: "1002",
        strategy: MessageStrategy::JoinViolations,
    },
    Rule {
        kind: Some(FailureKind::Constraint),
        code: "1003",
        strategy: MessageStrategy::JoinViolations,
    },
    Rule {
        kind: Some(FailureKind::MissingParameter),
        code: "1004",
        strategy: MessageStrategy::ParameterName,
    },
    Rule {
        kind: Some(FailureKind::MethodNotSupported),
        code: "1005",
        strategy: MessageStrategy::Fixed("Request method not supported"),
    },
    Rule {
        kind: Some(FailureKind::ArgumentTypeMismatch),
        code: "1006",
        strategy: MessageStrategy::Fixed("Request parameter type mismatch"),
    },
    Rule {
        kind: Some(FailureKind::CredentialMismatch),
        code: "1007",
        strategy: MessageStrategy::Fixed("Incorrect username or password"),
    },
    Rule {
        kind: Some(FailureKind::AccessTokenExpired),
        code: "1008",
        strategy: MessageStrategy::Fixed("Access token has expired"),
    },
    Rule {
        kind: Some(FailureKind::RefreshTokenExpired),
        code: "1009",
        strategy: MessageStrategy::Fixed("Refresh token has expired, please log in again"),
    },
];

/// Universal fallback, last in matching precedence and always reachable
static FALLBACK: Rule = Rule {
    kind: None,
    code: "1001",
    strategy: MessageStrategy::OwnMessage,
};

/// Select the translation rule for a failure
///
/// Exact lookup on the failure's kind discriminant; kinds without a
/// table entry get the fallback rule. Pure: no logging, no state.
pub fn classify(failure: &ApiFailure) -> &'static Rule {
    let kind = failure.kind();
    RULES
        .iter()
        .find(|rule| rule.kind == Some(kind))
        .unwrap_or(&FALLBACK)
}

/// Execute a rule against a failure, producing the response envelope
///
/// `data` is always absent on this path. Never panics.
pub fn render(rule: &Rule, failure: &ApiFailure) -> ResultEnvelope<String> {
    ResultEnvelope::error(rule.code, rule.message(failure))
}
