//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, create_post_handler, dashboard_handler, home_handler, new_post_form_handler,
    regional_party_comparison_handler, student_conservative_handler,
};
use axum::{Router, routing::get};

/// Public HTML pages. Each path is registered once.
///
/// # Endpoints
///
/// - `GET  /`, `GET /home`              - Post list
/// - `GET  /about`                      - About page
/// - `GET  /post/new`, `POST /post/new` - New-post form
/// - `GET  /dashboard`                  - Page views per day
/// - `GET  /student_conservative`       - Student share vs Conservative share
/// - `GET  /regional_party_comparison`  - Party shares by region
pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/home", get(home_handler))
        .route("/about", get(about_handler))
        .route(
            "/post/new",
            get(new_post_form_handler).post(create_post_handler),
        )
        .route("/dashboard", get(dashboard_handler))
        .route("/student_conservative", get(student_conservative_handler))
        .route(
            "/regional_party_comparison",
            get(regional_party_comparison_handler),
        )
}
