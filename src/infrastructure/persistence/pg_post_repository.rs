//! PostgreSQL implementation of the blog post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{BlogPost, NewBlogPost};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
    timestamp: DateTime<Utc>,
}

impl From<PostRow> for BlogPost {
    fn from(r: PostRow) -> Self {
        BlogPost::new(r.id, r.title, r.content, r.user_id, r.timestamp)
    }
}

/// PostgreSQL repository for blog posts.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, user_id, "timestamp"
            FROM blog_posts
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO blog_posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, user_id, "timestamp"
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_posts(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
