use crate::models::Book;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /books handler - List all books
///
/// Returns the whole collection in insertion order. No filtering or paging.
#[utoipa::path(
    get,
    path = routes::BOOKS,
    responses(
        (status = 200, description = "The list of the books", body = [Book])
    ),
    tag = "Books"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Book>>) {
    let books = state.store.read().await.list_books().to_vec();

    tracing::info!("Listed {} books", books.len());
    (StatusCode::OK, Json(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{create_book, parse, send, setup_test_app};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let (_dir, _state, app) = setup_test_app();

        let (status, body) = send(&app, "GET", "/books", None).await;

        assert_eq!(status, StatusCode::OK);
        let books: Vec<Book> = parse(&body);
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_list_endpoint_insertion_order_survives_updates() {
        let (_dir, _state, app) = setup_test_app();

        let first = create_book(&app, json!({"title": "Dune", "author": "Frank Herbert"})).await;
        let second = create_book(&app, json!({"title": "Emma", "author": "Jane Austen"})).await;
        let third = create_book(&app, json!({"title": "Ulysses", "author": "James Joyce"})).await;

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/books/{}", first.id),
            Some(json!({"title": "Dune Messiah"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);

        let books: Vec<Book> = parse(&body);
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec![first.id.as_str(), second.id.as_str(), third.id.as_str()]);
        assert_eq!(books[0].title.as_deref(), Some("Dune Messiah"));
    }

    #[tokio::test]
    async fn test_list_endpoint_includes_extra_fields() {
        let (_dir, _state, app) = setup_test_app();

        create_book(
            &app,
            json!({"title": "Dune", "author": "Frank Herbert", "year": 1965}),
        )
        .await;

        let (_, body) = send(&app, "GET", "/books", None).await;
        let books: serde_json::Value = parse(&body);
        assert_eq!(books[0]["year"], 1965);
    }
}
