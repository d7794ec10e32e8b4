use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const BOOK_NOT_FOUND: &str = "The book was not found";
pub const BOOK_EXISTS: &str = "The book is already exists";

/// Custom error type for the books endpoints
///
/// Expected failures are answered with a plain-text body carrying a
/// human-readable message, not a JSON envelope.
#[derive(Debug)]
pub enum ApiError {
    /// No book carries the requested id
    BookNotFound,
    /// A create request collides with an existing book
    BookExists,
    /// Reading or flushing the books database failed
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BookNotFound => (StatusCode::NOT_FOUND, BOOK_NOT_FOUND).into_response(),
            ApiError::BookExists => (StatusCode::CONFLICT, BOOK_EXISTS).into_response(),
            ApiError::Storage(err) => {
                tracing::error!("Storage error: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}
