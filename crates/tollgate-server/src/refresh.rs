use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use tollgate_auth::Authenticator;
use tollgate_core::{ApiFailure, ResultEnvelope};

use crate::respond::failure_response;

/// Handle `POST /api/token/refresh?token=...`
pub async fn refresh_handler(
    State(auth): State<Arc<Authenticator>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(token) = params.get("token") else {
        return failure_response(&ApiFailure::MissingParameter {
            name: "token".to_owned(),
        });
    };

    match auth.refresh(token) {
        Ok(pair) => Json(ResultEnvelope::ok(pair)).into_response(),
        Err(error) => failure_response(&error.into()),
    }
}
