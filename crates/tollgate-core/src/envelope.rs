use serde::{Deserialize, Serialize};

/// Success marker code used by every non-error response
pub const SUCCESS_CODE: &str = "0";

/// Uniform response body returned for every request, success or failure
///
/// The wire contract distinguishes outcomes purely via `code` and
/// `message`; `data` is present only on the success path and is omitted
/// from the serialized body otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    /// Stable machine-readable code (`"0"` for success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Payload, success responses only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResultEnvelope<T> {
    /// Build a success envelope carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE.to_owned(),
            message: "success".to_owned(),
            data: Some(data),
        }
    }

    /// Build an error envelope with no payload
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether this envelope reports success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
