use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use service::errors::ServiceError;

/// Transport-side wrapper that maps service outcomes onto HTTP statuses.
///
/// Bodies are plain text so clients can surface them directly; 5xx
/// responses are logged before leaving the process.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Descriptive 400 for request bodies that cannot be decoded.
    pub fn bad_request(msg: String) -> Self {
        Self(ServiceError::Validation(msg))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::AlreadyExists(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = self.0.to_string();
        if status.is_server_error() {
            error!(%status, error = %msg, "request failed");
        }
        (status, msg).into_response()
    }
}
