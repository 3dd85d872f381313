//! New-post form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{self, FlashKind};
use crate::web::forms::{PostForm, field_messages};

/// Template for the new-post form.
///
/// Carries the submitted values back with per-field errors when validation
/// fails.
#[derive(Template, WebTemplate, Default)]
#[template(path = "create_post.html")]
pub struct CreatePostTemplate {
    pub title: &'static str,
    pub form: PostForm,
    pub title_errors: Vec<String>,
    pub content_errors: Vec<String>,
}

impl CreatePostTemplate {
    fn new(form: PostForm) -> Self {
        Self {
            title: "New Post",
            form,
            ..Self::default()
        }
    }
}

/// Renders an empty new-post form.
///
/// # Endpoint
///
/// `GET /post/new`
pub async fn new_post_form_handler() -> impl IntoResponse {
    CreatePostTemplate::new(PostForm::default())
}

/// Validates and publishes a post, then redirects home with a flash.
///
/// # Endpoint
///
/// `POST /post/new` (`application/x-www-form-urlencoded`: `title`, `content`)
///
/// # Response
///
/// - **303 See Other** to `/home` on success
/// - **200 OK** with the form and error messages when validation fails
pub async fn create_post_handler(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let mut page = CreatePostTemplate::new(form);
        page.title_errors = field_messages(&errors, "title");
        page.content_errors = field_messages(&errors, "content");
        return Ok(page.into_response());
    }

    state
        .post_service
        .create_post(&form.title, &form.content)
        .await?;

    Ok((
        [(SET_COOKIE, flash::set_cookie(FlashKind::PostCreated))],
        Redirect::to("/home"),
    )
        .into_response())
}
