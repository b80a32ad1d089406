//! Remote resources shown by the app.
//!
//! Each resource declares its payload type, its schema and how it reads on
//! screen. The fetch machinery itself is generic over [`Resource`].

mod book;
mod music;
mod user;

use std::fmt;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::schema::ValidationSchema;

pub use book::{Book, BookResponse};
pub use music::Music;
pub use user::User;

/// Identifies a resource in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    User,
    Book,
    Music,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::User, ResourceKind::Book, ResourceKind::Music];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Book => "book",
            ResourceKind::Music => "music",
        }
    }

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::User => "Cool User",
            ResourceKind::Book => "Book",
            ResourceKind::Music => "Music",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ResourceKind::User => user::DEFAULT_URL,
            ResourceKind::Book => book::DEFAULT_URL,
            ResourceKind::Music => music::DEFAULT_URL,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed wording for the loading and error views of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCopy {
    pub loading: &'static str,
    pub error_headline: &'static str,
    pub error_detail: &'static str,
    pub error_retry: &'static str,
    pub content_retry: &'static str,
}

/// Text of the content view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub headline: String,
    pub details: Vec<String>,
}

/// A payload type fetched from one endpoint.
pub trait Resource: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn schema() -> ValidationSchema<Self>;

    fn copy() -> PanelCopy;

    /// Text for the content view, or `None` when there is nothing to show.
    fn content(&self) -> Option<Content>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_toml_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: ResourceKind,
        }

        for kind in ResourceKind::ALL {
            let parsed: Wrapper = toml::from_str(&format!("kind = \"{}\"", kind)).unwrap();
            assert_eq!(parsed.kind, kind);
        }
    }

    #[test]
    fn default_urls_are_distinct() {
        assert_ne!(ResourceKind::User.default_url(), ResourceKind::Music.default_url());
        assert!(ResourceKind::Book.default_url().starts_with("https://fakerapi.it/"));
    }
}
