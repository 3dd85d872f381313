//! Repository trait for page-view tracking.

use crate::domain::entities::{Day, DaySummary, IpView, VisitOutcome};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for daily view counters and per-IP visit records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgViewRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Counts one visit for `visit.date_id` and records the IP's first visit
    /// of that day.
    ///
    /// Both writes happen atomically. The day counter is incremented in a
    /// single upsert, so concurrent first visits of a day never collide.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, visit: IpView) -> Result<VisitOutcome, AppError>;

    /// Returns all day counters ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_days(&self) -> Result<Vec<Day>, AppError>;

    /// Returns the most recent `limit` days with their distinct visitor
    /// counts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_summaries(&self, limit: i64) -> Result<Vec<DaySummary>, AppError>;
}
