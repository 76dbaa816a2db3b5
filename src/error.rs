use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player id is required (?id=12345)")]
    MissingPlayerId,
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, details) = match self {
            ApiError::MissingPlayerId => (StatusCode::BAD_REQUEST, None),
            // `details` duplicates the message on upstream failures.
            ApiError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, Some(message.clone())),
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });

        (status, body).into_response()
    }
}
