//! PostgreSQL implementation of the UK dataset repository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::UkData;
use crate::domain::repositories::UkDataRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UkDataRow {
    constituency_name: String,
    country: Option<String>,
    region: Option<String>,
    c11_fulltime_student: Option<f64>,
    c11_retired: Option<f64>,
    c11_female: Option<f64>,
    con_vote19: Option<i64>,
    lab_vote19: Option<i64>,
    ld_vote19: Option<i64>,
    total_vote19: Option<i64>,
    turnout19: Option<f64>,
}

impl From<UkDataRow> for UkData {
    fn from(r: UkDataRow) -> Self {
        UkData {
            constituency_name: r.constituency_name,
            country: r.country,
            region: r.region,
            c11_fulltime_student: r.c11_fulltime_student,
            c11_retired: r.c11_retired,
            c11_female: r.c11_female,
            con_vote19: r.con_vote19,
            lab_vote19: r.lab_vote19,
            ld_vote19: r.ld_vote19,
            total_vote19: r.total_vote19,
            turnout19: r.turnout19,
        }
    }
}

/// PostgreSQL repository for the static UK constituency dataset.
pub struct PgUkDataRepository {
    pool: Arc<PgPool>,
}

impl PgUkDataRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UkDataRepository for PgUkDataRepository {
    async fn list_all(&self) -> Result<Vec<UkData>, AppError> {
        let rows = sqlx::query_as::<_, UkDataRow>(
            r#"
            SELECT constituency_name, country, region,
                   c11_fulltime_student, c11_retired, c11_female,
                   con_vote19, lab_vote19, ld_vote19, total_vote19, turnout19
            FROM uk_data
            ORDER BY constituency_name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UkData::from).collect())
    }

    async fn upsert_many(&self, rows: Vec<UkData>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let written = upsert_rows(&mut tx, rows).await?;
        tx.commit().await?;

        Ok(written)
    }

    async fn replace_all(&self, rows: Vec<UkData>) -> Result<(u64, u64), AppError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM uk_data")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let written = upsert_rows(&mut tx, rows).await?;

        tx.commit().await?;

        Ok((deleted, written))
    }
}

/// Upserts `rows` on an open connection; the caller owns the transaction.
async fn upsert_rows(conn: &mut PgConnection, rows: Vec<UkData>) -> Result<u64, sqlx::Error> {
    let mut written = 0;

    for row in rows {
        written += sqlx::query(
            r#"
            INSERT INTO uk_data (
                constituency_name, country, region,
                c11_fulltime_student, c11_retired, c11_female,
                con_vote19, lab_vote19, ld_vote19, total_vote19, turnout19
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (constituency_name) DO UPDATE SET
                country = EXCLUDED.country,
                region = EXCLUDED.region,
                c11_fulltime_student = EXCLUDED.c11_fulltime_student,
                c11_retired = EXCLUDED.c11_retired,
                c11_female = EXCLUDED.c11_female,
                con_vote19 = EXCLUDED.con_vote19,
                lab_vote19 = EXCLUDED.lab_vote19,
                ld_vote19 = EXCLUDED.ld_vote19,
                total_vote19 = EXCLUDED.total_vote19,
                turnout19 = EXCLUDED.turnout19
            "#,
        )
        .bind(row.constituency_name)
        .bind(row.country)
        .bind(row.region)
        .bind(row.c11_fulltime_student)
        .bind(row.c11_retired)
        .bind(row.c11_female)
        .bind(row.con_vote19)
        .bind(row.lab_vote19)
        .bind(row.ld_vote19)
        .bind(row.total_vote19)
        .bind(row.turnout19)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    Ok(written)
}
