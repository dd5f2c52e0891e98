use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;
use crate::error::DomainError;

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// A post before persistence: no id and no creation timestamp yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

/// Full replacement of the client-editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Persist-ready post with a generated ID and creation time.
    ///
    /// The timestamp is cut to microseconds, the precision PostgreSQL keeps,
    /// so a post compares equal to what any store hands back for it.
    pub fn from_new(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: new.author,
            title: new.title,
            content: new.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Replace author, title and content. `id` and `created` never change.
    pub fn replace(&mut self, update: PostUpdate) {
        self.author = update.author;
        self.title = update.title;
        self.content = update.content;
    }
}

impl NewPost {
    pub fn new(author: Author, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.author, &self.title, &self.content)
    }
}

impl PostUpdate {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.author, &self.title, &self.content)
    }
}

fn validate_fields(author: &Author, title: &str, content: &str) -> Result<(), DomainError> {
    let missing = [
        ("title", title.trim().is_empty()),
        ("content", content.trim().is_empty()),
        ("author.firstName", author.first_name.trim().is_empty()),
        ("author.lastName", author.last_name.trim().is_empty()),
    ]
    .into_iter()
    .find(|(_, blank)| *blank);

    match missing {
        Some((field, _)) => Err(DomainError::Validation(format!(
            "Missing `{}` in request body",
            field
        ))),
        None => Ok(()),
    }
}
