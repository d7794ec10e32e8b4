use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

pub const BOOK_DELETED: &str = "The book was deleted";

/// DELETE /books/:id handler - Remove a book by id
#[utoipa::path(
    delete,
    path = routes::BOOK_ITEM,
    params(
        ("id" = String, Path, description = "The book id")
    ),
    responses(
        (status = 200, description = "The book was deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain")
    ),
    tag = "Books"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let mut store = state.store.write().await;

    if !store.remove(&id)? {
        tracing::info!("Book not found with id: {}", id);
        return Err(ApiError::BookNotFound);
    }

    tracing::info!("Deleted book with id: {}", id);
    Ok((StatusCode::OK, BOOK_DELETED))
}
