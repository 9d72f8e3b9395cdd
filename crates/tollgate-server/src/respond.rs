//! Terminal handling of failures: classify, render, serialize
//!
//! Every failure that reaches this module produces a well-formed
//! envelope with HTTP status 200; outcomes are distinguished purely via
//! the envelope's `code`. Nothing is ever re-raised.

use axum::Json;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tollgate_core::{ApiFailure, classify, render};

/// Convert any failure into the uniform envelope response
pub fn failure_response(failure: &ApiFailure) -> Response {
    let rule = classify(failure);
    let envelope = render(rule, failure);

    match failure {
        ApiFailure::Other { .. } => {
            tracing::warn!(code = %envelope.code, error = %failure, "unclassified failure");
        }
        _ => {
            tracing::debug!(code = %envelope.code, "request failed");
        }
    }

    (StatusCode::OK, Json(envelope)).into_response()
}

/// Router fallback: no route matched the requested path
pub async fn route_not_found(uri: Uri) -> Response {
    failure_response(&ApiFailure::RouteNotFound {
        path: uri.path().to_owned(),
    })
}

/// Router fallback: route matched but not for this method
pub async fn method_not_allowed() -> Response {
    failure_response(&ApiFailure::MethodNotSupported)
}
