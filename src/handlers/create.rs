use crate::error::ApiError;
use crate::id::generate_id;
use crate::models::{Book, BookInput};
use crate::routes;
use crate::state::AppState;
use crate::store::BookQuery;
use axum::{extract::State, http::StatusCode, Json};

/// POST /books handler - Create a new book
///
/// The request body is merged over a freshly generated id, so a body that
/// carries its own `id` keeps it. The create is rejected when the id is
/// already taken, or when some book has the same title and some book has
/// the same author. Those two need not be the same record.
#[utoipa::path(
    post,
    path = routes::BOOKS,
    request_body = BookInput,
    responses(
        (status = 200, description = "The book was successfully created", body = Book),
        (status = 409, description = "The book is already exists", body = String, content_type = "text/plain")
    ),
    tag = "Books"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = Book::from_input(generate_id(), input);

    let mut store = state.store.write().await;

    let id_taken = store.find_book(&BookQuery::by_id(&book.id)).is_some();
    // An absent title or author is never taken
    let title_taken = book
        .title
        .as_deref()
        .is_some_and(|title| store.find_book(&BookQuery::by_title(title)).is_some());
    let author_taken = book
        .author
        .as_deref()
        .is_some_and(|author| store.find_book(&BookQuery::by_author(author)).is_some());

    if id_taken || (title_taken && author_taken) {
        tracing::info!(
            "Rejected duplicate book (id: {}, title: {:?}, author: {:?})",
            book.id,
            book.title,
            book.author
        );
        return Err(ApiError::BookExists);
    }

    store.push(book.clone())?;

    tracing::info!("Created book with id: {}", book.id);
    Ok((StatusCode::OK, Json(book)))
}
