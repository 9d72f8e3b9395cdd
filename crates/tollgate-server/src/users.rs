use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use tollgate_auth::Authenticator;
use tollgate_core::{ApiFailure, FieldViolation, ResultEnvelope};

use crate::respond::failure_response;

/// A user as exposed over the API
#[derive(Debug, Serialize)]
pub struct UserView {
    id: u64,
    username: String,
}

/// Paging parameters for the user listing
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_size")]
    size: u64,
}

const fn default_page() -> u64 {
    1
}

const fn default_size() -> u64 {
    20
}

/// Handle `GET /api/users?page=&size=`
///
/// Paging bounds are checked programmatically; all violations are
/// collected in check order before the request is rejected.
pub async fn list_users(
    State(auth): State<Arc<Authenticator>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let Query(page_query) = match query {
        Ok(query) => query,
        Err(_) => return failure_response(&ApiFailure::ArgumentTypeMismatch),
    };

    let violations = check_paging(&page_query);
    if !violations.is_empty() {
        return failure_response(&ApiFailure::Constraint { violations });
    }

    let offset = (page_query.page - 1).saturating_mul(page_query.size);
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let size = usize::try_from(page_query.size).unwrap_or(usize::MAX);

    let page: Vec<UserView> = auth
        .usernames()
        .into_iter()
        .zip(1u64..)
        .skip(offset)
        .take(size)
        .map(|(username, id)| UserView { id, username })
        .collect();

    Json(ResultEnvelope::ok(page)).into_response()
}

/// Handle `GET /api/users/{id}` (Bearer access token required)
pub async fn get_user(
    State(auth): State<Arc<Authenticator>>,
    headers: HeaderMap,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(path) => path,
        Err(_) => return failure_response(&ApiFailure::ArgumentTypeMismatch),
    };

    let Some(token) = bearer_token(&headers) else {
        return failure_response(&ApiFailure::other("missing bearer token"));
    };

    if let Err(error) = auth.verify_access(token) {
        return failure_response(&error.into());
    }

    let usernames = auth.usernames();
    let index = usize::try_from(id.saturating_sub(1)).unwrap_or(usize::MAX);
    match usernames.get(index) {
        Some(username) if id >= 1 => Json(ResultEnvelope::ok(UserView {
            id,
            username: username.clone(),
        }))
        .into_response(),
        _ => failure_response(&ApiFailure::other(format!("user {id} not found"))),
    }
}

fn check_paging(query: &PageQuery) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if query.page == 0 {
        violations.push(FieldViolation::new("page", "page must be at least 1"));
    }
    if !(1..=100).contains(&query.size) {
        violations.push(FieldViolation::new("size", "size must be between 1 and 100"));
    }

    violations
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
