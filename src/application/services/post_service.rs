//! Blog post listing and creation.

use std::sync::Arc;

use crate::domain::entities::{BlogPost, NewBlogPost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Service for reading and publishing blog posts.
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Returns every post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.repository.list_posts().await
    }

    /// Publishes a post under the default author.
    ///
    /// Title and content are trimmed before storage. Input validation happens
    /// in the form layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<BlogPost, AppError> {
        let new_post = NewBlogPost::by_default_author(title.trim(), content.trim());
        let post = self.repository.create_post(new_post).await?;

        tracing::info!(post_id = post.id, title = %post.title, "Blog post created");

        Ok(post)
    }

    /// Counts all posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_posts(&self) -> Result<i64, AppError> {
        self.repository.count_posts().await
    }
}
