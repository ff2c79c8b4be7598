use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use models::person::Person;
use service::people::PersonInput;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// List the whole people roster.
#[utoipa::path(get, path = "/people", tag = "people",
    responses((status = 200, description = "OK")))]
pub async fn list_people(State(state): State<ServerState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.people.list().await?))
}

/// Fetch one person. Unknown ids answer `{}` with 200 rather than a 404.
#[utoipa::path(get, path = "/people/{id}", tag = "people",
    params(("id" = Uuid, Path, description = "person id")),
    responses((status = 200, description = "OK")))]
pub async fn get_person(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.people.get(id).await? {
        Some(person) => Ok(Json(serde_json::json!(person))),
        None => Ok(Json(serde_json::json!({}))),
    }
}

/// Create a person; the id is generated server-side and echoed back.
#[utoipa::path(post, path = "/people/add", tag = "people", request_body = crate::openapi::PersonRequest,
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request")))]
pub async fn create_person(
    State(state): State<ServerState>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(input) = payload.map_err(|rej| ApiError::bad_request(rej.body_text()))?;
    Ok(Json(state.people.create(input).await?))
}

/// Delete one person by id and return the remaining roster. Unknown ids
/// leave the roster unchanged.
#[utoipa::path(delete, path = "/people/{id}", tag = "people",
    params(("id" = Uuid, Path, description = "person id")),
    responses((status = 200, description = "OK")))]
pub async fn delete_person(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.people.remove(id).await?))
}
