use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::students::dto::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),

    /// The body could not be read at all (too large, aborted). Keeps axum's status.
    #[error("unreadable request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("invalid student id: {0}")]
    InvalidId(String),

    #[error("body id {body} does not match path id {path}")]
    IdMismatch { path: Uuid, body: Uuid },

    /// Any database failure. Only the outermost context reaches the client.
    #[error("database error: {0}")]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidId(_) | ApiError::IdMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UnreadableBody { status, .. } => *status,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Store(e) => {
                let chain = format!("{:#}", e);
                error!(error = %chain, "store operation failed");
            }
            other => warn!(error = %other, "rejected request"),
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
