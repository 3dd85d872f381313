//! Repository trait for blog posts.

use crate::domain::entities::{BlogPost, NewBlogPost};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for blog post storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError>;

    /// Inserts a new post and returns it with its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError>;

    /// Counts all posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_posts(&self) -> Result<i64, AppError>;
}
