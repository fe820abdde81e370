use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self {
            // Lookup misses on mutation paths and broken booking references
            // are caller mistakes, reported as 400 per the API contract.
            AppError::EntityNotFound(_)
            | AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnexpectedError(_) => {
                tracing::error!(
                    error.cause_chain = ?self,
                    error.message = %self,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, self.to_string()).into_response()
    }
}
