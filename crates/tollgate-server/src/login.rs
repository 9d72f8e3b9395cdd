use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tollgate_auth::Authenticator;
use tollgate_core::{ApiFailure, FieldViolation, ResultEnvelope};

use crate::respond::failure_response;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

const MAX_USERNAME_LEN: usize = 64;

/// Handle `POST /api/login`
pub async fn login_handler(
    State(auth): State<Arc<Authenticator>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return failure_response(&ApiFailure::Bind {
                violations: vec![FieldViolation::new("body", rejection.body_text())],
            });
        }
    };

    let violations = validate(&request);
    if !violations.is_empty() {
        return failure_response(&ApiFailure::Validation { violations });
    }

    match auth.login(&request.username, &request.password) {
        Ok(pair) => Json(ResultEnvelope::ok(pair)).into_response(),
        Err(error) => failure_response(&error.into()),
    }
}

/// Field checks in declaration order; collects all violations
fn validate(request: &LoginRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if request.username.trim().is_empty() {
        violations.push(FieldViolation::new("username", "username must not be blank"));
    } else if request.username.len() > MAX_USERNAME_LEN {
        violations.push(FieldViolation::new(
            "username",
            "username must be at most 64 characters",
        ));
    }

    if request.password.is_empty() {
        violations.push(FieldViolation::new("password", "password must not be blank"));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_collected_in_declaration_order() {
        let request = LoginRequest {
            username: String::new(),
            password: String::new(),
        };

        let violations = validate(&request);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "username");
        assert_eq!(violations[1].field, "password");
    }

    #[test]
    fn overlong_username_is_a_violation() {
        let request = LoginRequest {
            username: "x".repeat(65),
            password: "pw".to_owned(),
        };

        let violations = validate(&request);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "username must be at most 64 characters");
    }

    #[test]
    fn valid_request_has_no_violations() {
        let request = LoginRequest {
            username: "alice".to_owned(),
            password: "s3cret".to_owned(),
        };

        assert!(validate(&request).is_empty());
    }
}
