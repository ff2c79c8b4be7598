use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::people::PeopleService;
use service::users::UserService;

use crate::openapi::ApiDoc;

pub mod people;
pub mod users;

/// Shared handler state: one service per API surface, both backed by
/// process-local stores.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService>,
    pub people: Arc<PeopleService>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router, including registration, people CRUD,
/// and documentation routes.
pub fn build_router(state: ServerState) -> Router {
    // Public routes (health + OpenAPI document)
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Registration surface
    let users = Router::new()
        .route("/register", post(users::register))
        .route("/user", get(users::get_user));

    // People CRUD surface; the static /people/add segment must be a
    // separate route so it never shadows /people/:id
    let people = Router::new()
        .route("/people", get(people::list_people))
        .route("/people/add", post(people::create_person))
        .route("/people/:id", get(people::get_person).delete(people::delete_person));

    // Compose
    public
        .merge(users)
        .merge(people)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
