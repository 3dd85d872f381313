//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{ChartService, PostService, ViewService};
use crate::domain::repositories::{PostRepository, UkDataRepository, ViewRepository};
use crate::infrastructure::persistence::{PgPostRepository, PgUkDataRepository, PgViewRepository};

#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub view_service: Arc<ViewService>,
    pub chart_service: Arc<ChartService>,
    /// When true, the client IP is read from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, behind_proxy: bool) -> Self {
        Self::from_repositories(
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgViewRepository::new(pool.clone())),
            Arc::new(PgUkDataRepository::new(pool)),
            behind_proxy,
        )
    }

    /// Builds the state from arbitrary repository implementations.
    pub fn from_repositories(
        posts: Arc<dyn PostRepository>,
        views: Arc<dyn ViewRepository>,
        uk_data: Arc<dyn UkDataRepository>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            post_service: Arc::new(PostService::new(posts)),
            view_service: Arc::new(ViewService::new(views.clone())),
            chart_service: Arc::new(ChartService::new(views, uk_data)),
            behind_proxy,
        }
    }
}
