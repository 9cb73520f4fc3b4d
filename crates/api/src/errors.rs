use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extman_domain::DomainError;
use tracing::error;

use crate::dto::MessageResponse;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::ExtensionNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Extension {} not found", id),
            ),

            DomainError::InvalidExtensionId(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::SeedLoad(_) | DomainError::Storage(_) => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
