use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Book, BookInput, HealthResponse, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "books-api",
        version = "1.0.0",
        description = "A simple books library API backed by a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Book,
            BookInput,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "Books", description = "The books managing API")
    )
)]
pub struct ApiDoc;
