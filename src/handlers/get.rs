use crate::error::ApiError;
use crate::models::Book;
use crate::routes;
use crate::state::AppState;
use crate::store::BookQuery;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /books/:id handler - Retrieve a book by id
#[utoipa::path(
    get,
    path = routes::BOOK_ITEM,
    params(
        ("id" = String, Path, description = "The book id")
    ),
    responses(
        (status = 200, description = "The book description by id", body = Book),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain")
    ),
    tag = "Books"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let store = state.store.read().await;

    match store.find_book(&BookQuery::by_id(&id)) {
        Some(book) => {
            tracing::info!("Retrieved book with id: {}", id);
            Ok((StatusCode::OK, Json(book.clone())))
        }
        None => {
            tracing::info!("Book not found with id: {}", id);
            Err(ApiError::BookNotFound)
        }
    }
}
