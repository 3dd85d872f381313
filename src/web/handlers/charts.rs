//! Chart pages: daily views and the UK election visualisations.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::charts::Figure;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the page-views dashboard.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: &'static str,
    pub graph_json: String,
}

/// Template shared by the UK dataset charts.
#[derive(Template, WebTemplate)]
#[template(path = "uk_viz.html")]
pub struct UkVizTemplate {
    pub title: &'static str,
    pub graph_json: String,
}

/// Serializes a figure for an inline `<script>` block.
///
/// `<` only occurs inside JSON strings and is written as `\u003c`, so data
/// can neither close the block (`</script>`) nor open a comment (`<!--`).
fn embed(figure: &Figure) -> Result<String, AppError> {
    Ok(figure.to_json()?.replace('<', "\\u003c"))
}

/// Renders a bar chart of page views per day.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let figure = state.chart_service.page_views().await?;

    Ok(DashboardTemplate {
        title: "Page views per day",
        graph_json: embed(&figure)?,
    })
}

/// Renders the student population vs Conservative share scatter.
///
/// # Endpoint
///
/// `GET /student_conservative`
pub async fn student_conservative_handler(
    State(state): State<AppState>,
) -> Result<UkVizTemplate, AppError> {
    let figure = state.chart_service.student_conservative().await?;

    Ok(UkVizTemplate {
        title: "UK Student Population vs Conservative Vote",
        graph_json: embed(&figure)?,
    })
}

/// Renders Conservative vs Labour vote share per region.
///
/// # Endpoint
///
/// `GET /regional_party_comparison`
pub async fn regional_party_comparison_handler(
    State(state): State<AppState>,
) -> Result<UkVizTemplate, AppError> {
    let figure = state.chart_service.regional_party_comparison().await?;

    Ok(UkVizTemplate {
        title: "Regional Party Comparison",
        graph_json: embed(&figure)?,
    })
}
