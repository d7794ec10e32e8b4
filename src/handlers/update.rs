use crate::error::ApiError;
use crate::models::{Book, BookInput};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// PUT /books/:id handler - Update a book by id
///
/// Only the supplied fields are replaced. An `id` in the body renames the
/// record.
#[utoipa::path(
    put,
    path = routes::BOOK_ITEM,
    params(
        ("id" = String, Path, description = "The book id")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "The book was updated", body = Book),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain")
    ),
    tag = "Books"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let mut store = state.store.write().await;

    match store.update(&id, input)? {
        Some(book) => {
            tracing::info!("Updated book with id: {}", id);
            Ok((StatusCode::OK, Json(book)))
        }
        None => {
            tracing::info!("Book not found with id: {}", id);
            Err(ApiError::BookNotFound)
        }
    }
}
