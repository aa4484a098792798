use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::handlers::shared::ApiResponse;
use crate::services::DuplicateCheckResult;

/// Failure taxonomy of the registration path. Every internal failure is
/// translated into one of these at the handler boundary; nothing escapes
/// unconverted.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or absent input. The client's fault; retrying without a
    /// change will fail again.
    #[error("{0}")]
    Validation(String),

    /// An identifying field of the submission collides with a stored team.
    /// The client must change its input; the store was not mutated.
    #[error("Duplicate Email, SRN or Team Name found. Team not created.")]
    Conflict(DuplicateCheckResult),

    /// Store unreachable or insert rejected. Possibly transient; no partial
    /// state is persisted on failure, so the client may resubmit.
    #[error("Insert failed")]
    Dependency(#[from] sqlx::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Dependency(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(message) => {
                log::warn!("Rejected submission: {}", message);
                HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
            }
            AppError::Conflict(result) => HttpResponse::Conflict().json(
                ApiResponse::error_with_data(result.clone(), &self.to_string()),
            ),
            // Internal detail stays in the log; the client sees a generic
            // failure only.
            AppError::Dependency(source) => {
                log::error!("Store operation failed: {}", source);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "Insert failed" }))
            }
        }
    }
}
