//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use charfreq_orchestration::TaskError;

use crate::content::ContentError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("unknown animation: {0}")]
    UnknownAnimation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Content(ContentError::NotFound) | AppError::UnknownAnimation(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Content(ContentError::Backend(_)) | AppError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
