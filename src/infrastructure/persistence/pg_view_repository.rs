//! PostgreSQL implementation of the page-view repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Day, DaySummary, IpView, VisitOutcome};
use crate::domain::repositories::ViewRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct DayRow {
    id: NaiveDate,
    views: i64,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: NaiveDate,
    views: i64,
    unique_visitors: i64,
}

/// PostgreSQL repository for daily counters and first-visit records.
///
/// Visits are counted with `INSERT ... ON CONFLICT` statements inside one
/// transaction, so the counter never goes through a read-then-write cycle.
pub struct PgViewRepository {
    pool: Arc<PgPool>,
}

impl PgViewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewRepository for PgViewRepository {
    async fn record_visit(&self, visit: IpView) -> Result<VisitOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let views: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO days (id, views)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE SET views = days.views + 1
            RETURNING views
            "#,
        )
        .bind(visit.date_id)
        .fetch_one(&mut *tx)
        .await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO ip_views (ip, date_id)
            VALUES ($1, $2)
            ON CONFLICT (ip, date_id) DO NOTHING
            "#,
        )
        .bind(&visit.ip)
        .bind(visit.date_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        Ok(VisitOutcome {
            views,
            first_visit: inserted > 0,
        })
    }

    async fn list_days(&self) -> Result<Vec<Day>, AppError> {
        let rows = sqlx::query_as::<_, DayRow>("SELECT id, views FROM days ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|r| Day::new(r.id, r.views)).collect())
    }

    async fn recent_summaries(&self, limit: i64) -> Result<Vec<DaySummary>, AppError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT d.id, d.views, COUNT(iv.ip) AS unique_visitors
            FROM days d
            LEFT JOIN ip_views iv ON iv.date_id = d.id
            GROUP BY d.id, d.views
            ORDER BY d.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DaySummary {
                day: r.id,
                views: r.views,
                unique_visitors: r.unique_visitors,
            })
            .collect())
    }
}
