use serde::{Deserialize, Serialize};

use crate::schema::{ObjectShape, ValidationSchema};

use super::{Content, PanelCopy, Resource, ResourceKind};

pub const DEFAULT_URL: &str = "https://fakerapi.it/api/v2/books?_quantity=1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

/// Envelope returned by the books endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub data: Vec<Book>,
}

impl BookResponse {
    /// The book on display.
    pub fn first(&self) -> Option<&Book> {
        self.data.first()
    }
}

impl Resource for BookResponse {
    const KIND: ResourceKind = ResourceKind::Book;

    fn schema() -> ValidationSchema<Self> {
        ValidationSchema::new(
            "book",
            ObjectShape::new().array_of("data", ObjectShape::new().string("title").string("author")),
        )
    }

    fn copy() -> PanelCopy {
        PanelCopy {
            loading: "📚 Searching the shelves...",
            error_headline: "😔 Our deepest apologies. 😔",
            error_detail: "We seem to have some trouble finding a good book at the moment.",
            error_retry: "I demand literature",
            content_retry: "Not interesting enough. Give me another!",
        }
    }

    fn content(&self) -> Option<Content> {
        let book = self.first()?;
        Some(Content {
            headline: format!("Enjoy reading {}", book.title),
            details: vec![format!("Written by {}", book.author)],
        })
    }
}
