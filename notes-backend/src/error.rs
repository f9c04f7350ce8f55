//! Domain errors and their HTTP mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use notes_types::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Note not found")]
    NotFound(i64),

    /// Request body or path failed schema coercion
    #[error("{0}")]
    InvalidRequest(String),
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let NoteError::NotFound(id) = self {
            log::debug!("Note {} not found", id);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
