use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use models::user::User;
use service::users::RegisterParams;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    pub email: Option<String>,
}

/// Register a new user keyed by email.
#[utoipa::path(post, path = "/register", tag = "users", request_body = crate::openapi::RegisterRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 403, description = "Already Registered")))]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterParams>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(params) = payload.map_err(|rej| ApiError::bad_request(rej.body_text()))?;
    state.users.register(params).await?;
    Ok(StatusCode::CREATED)
}

/// Fetch a registered user by email. A missing parameter behaves like an
/// empty email and fails validation.
#[utoipa::path(get, path = "/user", tag = "users",
    params(("email" = Option<String>, Query, description = "registered email address")),
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request"), (status = 404, description = "Not Found")))]
pub async fn get_user(
    State(state): State<ServerState>,
    Query(query): Query<GetUserQuery>,
) -> Result<Json<User>, ApiError> {
    let email = query.email.unwrap_or_default();
    let user = state.users.get_by_email(&email).await?;
    Ok(Json(user))
}
