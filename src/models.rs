use serde::{Deserialize, Serialize};
use serde_json::Map;

/// A stored book record
///
/// Only `id` is guaranteed. `title` and `author` stay absent when the client
/// never sent them. Any other fields are kept in `extra`, in the order they
/// arrived, and serialized inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Book {
    /// The auto-generated id of the book
    #[schema(example = "d5fE_asz")]
    pub id: String,
    /// The book title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "The New Turing Omnibus")]
    pub title: Option<String>,
    /// The book author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alexander K. Dewdney")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, serde_json::Value>,
}

/// Request body for create and update
///
/// Nothing here is mandatory. Fields left out are simply not merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(as = EditBook)]
pub struct BookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "The New Turing Omnibus")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alexander K. Dewdney")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, serde_json::Value>,
}

impl Book {
    /// Build a new record from a generated id and a request body.
    ///
    /// The body is merged last, so an `id` in the body replaces the
    /// generated one.
    pub fn from_input(id: String, input: BookInput) -> Self {
        let mut book = Book {
            id,
            title: None,
            author: None,
            extra: Map::new(),
        };
        book.merge(input);
        book
    }

    /// Shallow-merge `input` onto this record
    pub fn merge(&mut self, input: BookInput) {
        if let Some(id) = input.id {
            self.id = id;
        }
        if input.title.is_some() {
            self.title = input.title;
        }
        if input.author.is_some() {
            self.author = input.author;
        }
        self.extra.extend(input.extra);
    }
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}
