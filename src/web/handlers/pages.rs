//! Home and about pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::domain::entities::BlogPost;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{self, Flash};

/// Template for the post list.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub posts: Vec<BlogPost>,
    pub flash: Option<Flash>,
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: &'static str,
}

/// Renders every blog post.
///
/// # Endpoint
///
/// `GET /` and `GET /home`
///
/// A pending flash message is shown once and its cookie cleared.
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let posts = state.post_service.list_posts().await?;
    let flash = flash::read(&headers);

    let mut response = HomeTemplate {
        title: "Home",
        posts,
        flash,
    }
    .into_response();

    if flash.is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, flash::clear_cookie());
    }

    Ok(response)
}

/// Renders the static about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler() -> impl IntoResponse {
    AboutTemplate {
        title: "About page",
    }
}
