//! Chart construction for the dashboard and UK election pages.

use std::sync::Arc;

use crate::domain::charts::{BarMode, Figure, HoverMode, Layout, Trace, TraceMode};
use crate::domain::election::{regional_party_shares, student_conservative_points};
use crate::domain::entities::Day;
use crate::domain::repositories::{UkDataRepository, ViewRepository};
use crate::error::AppError;

/// Builds chart figures from stored views and the UK dataset.
pub struct ChartService {
    views: Arc<dyn ViewRepository>,
    uk_data: Arc<dyn UkDataRepository>,
}

impl ChartService {
    /// Creates a new chart service.
    pub fn new(views: Arc<dyn ViewRepository>, uk_data: Arc<dyn UkDataRepository>) -> Self {
        Self { views, uk_data }
    }

    /// Bar chart of page views per day, one bar per stored day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn page_views(&self) -> Result<Figure, AppError> {
        let days = self.views.list_days().await?;
        Ok(page_views_figure(&days))
    }

    /// Scatter of full-time student share against Conservative vote share.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn student_conservative(&self) -> Result<Figure, AppError> {
        let rows = self.uk_data.list_all().await?;
        let points = student_conservative_points(&rows);

        tracing::debug!(rows = rows.len(), points = points.len(), "Student scatter built");

        let mut x = Vec::with_capacity(points.len());
        let mut y = Vec::with_capacity(points.len());
        let mut text = Vec::with_capacity(points.len());
        for point in points {
            x.push(point.student_percentage);
            y.push(point.conservative_share);
            text.push(point.constituency);
        }

        let trace = Trace::scatter(x, y)
            .with_mode(TraceMode::Markers)
            .with_text(text)
            .with_name("Constituencies");

        let layout = Layout::new(
            "Relationship Between Student Population and Conservative Vote Share",
            "Full-time Student Population (%)",
            "Conservative Vote Share (%)",
        )
        .with_hovermode(HoverMode::Closest);

        Ok(Figure::new(vec![trace], layout))
    }

    /// Grouped bars of Conservative and Labour vote share per region.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn regional_party_comparison(&self) -> Result<Figure, AppError> {
        let rows = self.uk_data.list_all().await?;
        let shares = regional_party_shares(&rows);

        let regions: Vec<String> = shares.iter().map(|s| s.region.clone()).collect();
        let con: Vec<f64> = shares.iter().map(|s| s.conservative_share).collect();
        let lab: Vec<f64> = shares.iter().map(|s| s.labour_share).collect();

        let data = vec![
            Trace::bar(regions.clone(), con)
                .with_name("Conservative")
                .with_color("blue"),
            Trace::bar(regions, lab).with_name("Labour").with_color("red"),
        ];

        let layout = Layout::new(
            "Conservative vs Labour Vote Share by UK Region",
            "UK Region",
            "Vote Share (%)",
        )
        .with_barmode(BarMode::Group);

        Ok(Figure::new(data, layout))
    }
}

/// Projects day counters onto a bar chart.
pub fn page_views_figure(days: &[Day]) -> Figure {
    let dates: Vec<String> = days.iter().map(Day::label).collect();
    let views: Vec<f64> = days.iter().map(|d| d.views as f64).collect();

    Figure::new(
        vec![Trace::bar(dates, views)],
        Layout::new("Page views per day", "Date", "Page views"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charts::Series;
    use crate::domain::entities::UkData;
    use crate::domain::repositories::{MockUkDataRepository, MockViewRepository};
    use chrono::NaiveDate;

    fn service(views: MockViewRepository, uk: MockUkDataRepository) -> ChartService {
        ChartService::new(Arc::new(views), Arc::new(uk))
    }

    fn uk_row(name: &str, region: &str, students: Option<f64>, con: i64, lab: i64, total: i64) -> UkData {
        UkData {
            region: Some(region.to_string()),
            c11_fulltime_student: students,
            con_vote19: Some(con),
            lab_vote19: Some(lab),
            total_vote19: Some(total),
            ..UkData::named(name)
        }
    }

    #[tokio::test]
    async fn test_page_views_has_one_bar_per_day() {
        let mut views = MockViewRepository::new();
        views.expect_list_days().times(1).returning(|| {
            Ok(vec![
                Day::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 5),
                Day::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 9),
                Day::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 1),
            ])
        });

        let figure = service(views, MockUkDataRepository::new())
            .page_views()
            .await
            .unwrap();

        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.data[0].x.len(), 3);
        assert_eq!(figure.data[0].y, Series::Numbers(vec![5.0, 9.0, 1.0]));
        assert_eq!(
            figure.data[0].x,
            Series::Labels(vec![
                "2024-01-01".to_string(),
                "2024-01-02".to_string(),
                "2024-01-03".to_string()
            ])
        );
    }

    #[test]
    fn test_page_views_figure_empty() {
        let figure = page_views_figure(&[]);

        assert!(figure.data[0].x.is_empty());
        assert_eq!(figure.layout.yaxis.title, "Page views");
    }

    #[tokio::test]
    async fn test_student_conservative_figure() {
        let mut uk = MockUkDataRepository::new();
        uk.expect_list_all().times(1).returning(|| {
            Ok(vec![
                uk_row("A", "North", Some(10.0), 100, 0, 500),
                uk_row("B", "North", None, 50, 0, 200),
            ])
        });

        let figure = service(MockViewRepository::new(), uk)
            .student_conservative()
            .await
            .unwrap();

        let trace = &figure.data[0];
        assert_eq!(trace.x, Series::Numbers(vec![10.0]));
        assert_eq!(trace.y, Series::Numbers(vec![20.0]));
        assert_eq!(trace.text, Some(vec!["A".to_string()]));
        assert_eq!(trace.mode, Some(TraceMode::Markers));
        assert_eq!(figure.layout.hovermode, Some(HoverMode::Closest));
    }

    #[tokio::test]
    async fn test_regional_figure_has_two_series() {
        let mut uk = MockUkDataRepository::new();
        uk.expect_list_all().times(1).returning(|| {
            Ok(vec![
                uk_row("N1", "North", None, 100, 50, 300),
                uk_row("N2", "North", None, 50, 100, 200),
                uk_row("L1", "London", None, 10, 30, 100),
            ])
        });

        let figure = service(MockViewRepository::new(), uk)
            .regional_party_comparison()
            .await
            .unwrap();

        assert_eq!(figure.data.len(), 2);
        let con = &figure.data[0];
        let lab = &figure.data[1];
        assert_eq!(con.name.as_deref(), Some("Conservative"));
        assert_eq!(lab.name.as_deref(), Some("Labour"));
        assert_eq!(
            con.x,
            Series::Labels(vec!["London".to_string(), "North".to_string()])
        );
        assert_eq!(con.y, Series::Numbers(vec![10.0, 30.0]));
        assert_eq!(lab.y, Series::Numbers(vec![30.0, 30.0]));
        assert_eq!(con.marker.as_ref().unwrap().color, "blue");
        assert_eq!(lab.marker.as_ref().unwrap().color, "red");
        assert_eq!(figure.layout.barmode, Some(BarMode::Group));
    }
}
