use serde::{Deserialize, Serialize};

use crate::schema::{ObjectShape, ValidationSchema};

use super::{Content, PanelCopy, Resource, ResourceKind};

pub const DEFAULT_URL: &str = "https://cool-fake-data.up.railway.app/api/user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub full_name: String,
    pub job_title: String,
    pub bio: String,
    /// Image URL.
    pub avatar: String,
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    fn schema() -> ValidationSchema<Self> {
        ValidationSchema::new(
            "user",
            ObjectShape::new()
                .string("firstName")
                .string("fullName")
                .string("jobTitle")
                .string("bio")
                .string("avatar"),
        )
    }

    fn copy() -> PanelCopy {
        PanelCopy {
            loading: "🔎 Finding the coolest of users...",
            error_headline: "😔 Our deepest apologies. 😔",
            error_detail: "We seem to have some trouble finding a cool user at the moment.",
            error_retry: "Try again",
            content_retry: "Not cool enough. Give me another.",
        }
    }

    fn content(&self) -> Option<Content> {
        Some(Content {
            headline: format!("Meet {}! They are a {}.", self.first_name, self.job_title),
            details: vec![
                format!("Full name: {}", self.full_name),
                format!("Key facts: {}", self.bio),
                format!("Avatar: {}", self.avatar),
            ],
        })
    }
}
