//! Blog post entity.

use chrono::{DateTime, Utc};

/// User id attached to every post created through the web form.
///
/// The blog has a single author and no accounts.
pub const DEFAULT_AUTHOR_ID: i64 = 1;

/// A published blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub timestamp: DateTime<Utc>,
}

impl BlogPost {
    /// Creates a new BlogPost instance.
    pub fn new(
        id: i64,
        title: String,
        content: String,
        user_id: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            user_id,
            timestamp,
        }
    }

    /// Formats the creation timestamp for display on the home page.
    pub fn posted_on(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Input data for creating a new post.
///
/// The id and timestamp are assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl NewBlogPost {
    /// Creates a post owned by [`DEFAULT_AUTHOR_ID`].
    pub fn by_default_author(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id: DEFAULT_AUTHOR_ID,
        }
    }
}
