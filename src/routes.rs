use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const BOOKS: &str = "/books";
pub const BOOK_ITEM: &str = "/books/{id}";
pub const API_DOCS: &str = "/api-docs";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router with all routes
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            BOOKS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            BOOK_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(API_DOCS).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
