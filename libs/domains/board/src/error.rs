use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Section not found: {0}")]
    SectionNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Section {0} still contains {1} task(s)")]
    SectionNotEmpty(Uuid, usize),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Consistency violation: {0}")]
    Consistency(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Convert BoardError to AppError for standardized error responses
impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::SectionNotFound(id) => {
                AppError::NotFound(format!("Section {} not found", id))
            }
            BoardError::TaskNotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            BoardError::SectionNotEmpty(id, count) => AppError::Conflict(format!(
                "Section {} still contains {} task(s); move or delete them first",
                id, count
            )),
            BoardError::Validation(msg) => AppError::BadRequest(msg),
            BoardError::Consistency(msg) => AppError::UnprocessableEntity(msg),
            BoardError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BoardError {
    fn from(err: mongodb::error::Error) -> Self {
        BoardError::Database(err.to_string())
    }
}
