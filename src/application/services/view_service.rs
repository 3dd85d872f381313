//! Page-view counting.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::entities::{Day, DaySummary, IpView, VisitOutcome};
use crate::domain::repositories::ViewRepository;
use crate::error::AppError;

/// Service recording visits and exposing the daily counters.
pub struct ViewService {
    repository: Arc<dyn ViewRepository>,
}

impl ViewService {
    /// Creates a new view service.
    pub fn new(repository: Arc<dyn ViewRepository>) -> Self {
        Self { repository }
    }

    /// Counts a visit from `ip` against today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit(&self, ip: &str) -> Result<VisitOutcome, AppError> {
        self.record_visit_on(ip, Local::now().date_naive()).await
    }

    /// Counts a visit from `ip` on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit_on(&self, ip: &str, day: NaiveDate) -> Result<VisitOutcome, AppError> {
        let outcome = self.repository.record_visit(IpView::new(ip, day)).await?;

        metrics::counter!("page_views_total").increment(1);
        if outcome.first_visit {
            metrics::counter!("unique_visitors_total").increment(1);
        }

        tracing::debug!(
            %day,
            ip,
            views = outcome.views,
            first_visit = outcome.first_visit,
            "Visit recorded"
        );

        Ok(outcome)
    }

    /// Returns every day counter ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_days(&self) -> Result<Vec<Day>, AppError> {
        self.repository.list_days().await
    }

    /// Returns up to `limit` most recent days with distinct visitor counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recent_summaries(&self, limit: i64) -> Result<Vec<DaySummary>, AppError> {
        self.repository.recent_summaries(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockViewRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_record_visit_on_passes_ip_and_day() {
        let mut mock_repo = MockViewRepository::new();
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        mock_repo
            .expect_record_visit()
            .withf(move |v| v.ip == "10.0.0.1" && v.date_id == day)
            .times(1)
            .returning(|_| {
                Ok(VisitOutcome {
                    views: 4,
                    first_visit: true,
                })
            });

        let service = ViewService::new(Arc::new(mock_repo));

        let outcome = service.record_visit_on("10.0.0.1", day).await.unwrap();

        assert_eq!(outcome.views, 4);
        assert!(outcome.first_visit);
    }

    #[tokio::test]
    async fn test_record_visit_uses_today() {
        let mut mock_repo = MockViewRepository::new();
        let today = Local::now().date_naive();

        mock_repo
            .expect_record_visit()
            .withf(move |v| v.date_id == today)
            .times(1)
            .returning(|_| {
                Ok(VisitOutcome {
                    views: 1,
                    first_visit: false,
                })
            });

        let service = ViewService::new(Arc::new(mock_repo));

        assert!(service.record_visit("::1").await.is_ok());
    }

    #[tokio::test]
    async fn test_record_visit_propagates_errors() {
        let mut mock_repo = MockViewRepository::new();

        mock_repo
            .expect_record_visit()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ViewService::new(Arc::new(mock_repo));

        let result = service.record_visit("127.0.0.1").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_list_days() {
        let mut mock_repo = MockViewRepository::new();

        mock_repo.expect_list_days().times(1).returning(|| {
            Ok(vec![Day::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 2)])
        });

        let service = ViewService::new(Arc::new(mock_repo));

        let days = service.list_days().await.unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].views, 2);
    }
}
