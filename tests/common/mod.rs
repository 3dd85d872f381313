#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use blog_dashboard::domain::entities::{
    BlogPost, Day, DaySummary, IpView, NewBlogPost, UkData, VisitOutcome,
};
use blog_dashboard::domain::repositories::{PostRepository, UkDataRepository, ViewRepository};
use blog_dashboard::error::AppError;
use blog_dashboard::routes::app_routes;
use blog_dashboard::state::AppState;
use chrono::{NaiveDate, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

/// In-memory post storage.
#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<BlogPost>>,
}

impl InMemoryPosts {
    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<BlogPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.all())
    }

    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let post = BlogPost::new(
            posts.len() as i64 + 1,
            new_post.title,
            new_post.content,
            new_post.user_id,
            Utc::now(),
        );
        posts.push(post.clone());
        Ok(post)
    }

    async fn count_posts(&self) -> Result<i64, AppError> {
        Ok(self.len() as i64)
    }
}

/// In-memory view counters with the same upsert semantics as PostgreSQL.
#[derive(Default)]
pub struct InMemoryViews {
    days: Mutex<BTreeMap<NaiveDate, i64>>,
    ip_views: Mutex<HashSet<IpView>>,
}

impl InMemoryViews {
    pub fn with_days(days: &[(NaiveDate, i64)]) -> Self {
        let views = Self::default();
        views.days.lock().unwrap().extend(days.iter().copied());
        views
    }

    pub fn views_on(&self, day: NaiveDate) -> Option<i64> {
        self.days.lock().unwrap().get(&day).copied()
    }

    pub fn ip_view_count(&self) -> usize {
        self.ip_views.lock().unwrap().len()
    }

    pub fn has_ip_view(&self, ip: &str, day: NaiveDate) -> bool {
        self.ip_views.lock().unwrap().contains(&IpView::new(ip, day))
    }
}

#[async_trait]
impl ViewRepository for InMemoryViews {
    async fn record_visit(&self, visit: IpView) -> Result<VisitOutcome, AppError> {
        let views = {
            let mut days = self.days.lock().unwrap();
            let views = days.entry(visit.date_id).or_insert(0);
            *views += 1;
            *views
        };
        let first_visit = self.ip_views.lock().unwrap().insert(visit);

        Ok(VisitOutcome { views, first_visit })
    }

    async fn list_days(&self) -> Result<Vec<Day>, AppError> {
        Ok(self
            .days
            .lock()
            .unwrap()
            .iter()
            .map(|(id, views)| Day::new(*id, *views))
            .collect())
    }

    async fn recent_summaries(&self, limit: i64) -> Result<Vec<DaySummary>, AppError> {
        let ip_views = self.ip_views.lock().unwrap();
        Ok(self
            .days
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .map(|(day, views)| DaySummary {
                day: *day,
                views: *views,
                unique_visitors: ip_views.iter().filter(|v| v.date_id == *day).count() as i64,
            })
            .collect())
    }
}

/// Post repository that has lost its database.
pub struct FailingPosts;

#[async_trait]
impl PostRepository for FailingPosts {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn create_post(&self, _new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count_posts(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

/// View repository whose every call fails like a lost database connection.
pub struct FailingViews;

#[async_trait]
impl ViewRepository for FailingViews {
    async fn record_visit(&self, _visit: IpView) -> Result<VisitOutcome, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list_days(&self) -> Result<Vec<Day>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn recent_summaries(&self, _limit: i64) -> Result<Vec<DaySummary>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

/// Fixed UK dataset.
#[derive(Default)]
pub struct StaticUkData {
    rows: Vec<UkData>,
}

impl StaticUkData {
    pub fn new(rows: Vec<UkData>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl UkDataRepository for StaticUkData {
    async fn list_all(&self) -> Result<Vec<UkData>, AppError> {
        Ok(self.rows.clone())
    }

    async fn upsert_many(&self, rows: Vec<UkData>) -> Result<u64, AppError> {
        Ok(rows.len() as u64)
    }

    async fn replace_all(&self, rows: Vec<UkData>) -> Result<(u64, u64), AppError> {
        Ok((self.rows.len() as u64, rows.len() as u64))
    }
}

pub fn uk_row(
    name: &str,
    region: Option<&str>,
    students: Option<f64>,
    con: Option<i64>,
    lab: Option<i64>,
    total: Option<i64>,
) -> UkData {
    UkData {
        region: region.map(str::to_string),
        c11_fulltime_student: students,
        con_vote19: con,
        lab_vote19: lab,
        total_vote19: total,
        ..UkData::named(name)
    }
}

/// Repositories behind a test server, kept for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub posts: Arc<InMemoryPosts>,
    pub views: Arc<InMemoryViews>,
}

pub fn spawn_app_with(views: InMemoryViews, uk_rows: Vec<UkData>) -> TestApp {
    let posts = Arc::new(InMemoryPosts::default());
    let views = Arc::new(views);
    let uk = Arc::new(StaticUkData::new(uk_rows));

    let state = AppState::from_repositories(posts.clone(), views.clone(), uk, true);
    let server = TestServer::new(app_routes(state, "static")).unwrap();

    TestApp {
        server,
        posts,
        views,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryViews::default(), vec![])
}

/// Extracts the chart JSON embedded in a rendered chart page.
pub fn embedded_figure(html: &str) -> serde_json::Value {
    let start = html.find("var figure = ").expect("figure script") + "var figure = ".len();
    let end = start + html[start..].find(";\n").expect("figure terminator");
    serde_json::from_str(&html[start..end]).expect("valid figure JSON")
}

pub async fn insert_test_post(pool: &PgPool, title: &str, content: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO blog_posts (title, content, user_id) VALUES ($1, $2, 1) RETURNING id",
    )
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_test_uk_row(pool: &PgPool, row: &UkData) {
    sqlx::query(
        r#"
        INSERT INTO uk_data (constituency_name, region, c11_fulltime_student, con_vote19, lab_vote19, total_vote19)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(&row.constituency_name)
    .bind(&row.region)
    .bind(row.c11_fulltime_student)
    .bind(row.con_vote19)
    .bind(row.lab_vote19)
    .bind(row.total_vote19)
    .execute(pool)
    .await
    .unwrap();
}
