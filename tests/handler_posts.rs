mod common;

use axum::http::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
struct PostForm<'a> {
    title: &'a str,
    content: &'a str,
}

#[tokio::test]
async fn test_new_post_form_renders() {
    let app = common::spawn_app();

    let response = app.server.get("/post/new").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("New Post"));
    assert!(html.contains(r#"name="title""#));
    assert!(html.contains(r#"name="content""#));
}

#[tokio::test]
async fn test_valid_post_is_created_and_redirects_home() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/post/new")
        .form(&PostForm {
            title: "Hello",
            content: "World",
        })
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/home");
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("flash=post_created"));

    let posts = app.posts.all();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].content, "World");
    assert_eq!(posts[0].user_id, 1);
}

#[tokio::test]
async fn test_post_fields_are_trimmed() {
    let app = common::spawn_app();

    app.server
        .post("/post/new")
        .form(&PostForm {
            title: "  Spaced  ",
            content: "\nBody\n",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let posts = app.posts.all();
    assert_eq!(posts[0].title, "Spaced");
    assert_eq!(posts[0].content, "Body");
}

#[tokio::test]
async fn test_empty_title_rerenders_form_with_error() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/post/new")
        .form(&PostForm {
            title: "   ",
            content: "Kept content",
        })
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("invalid-feedback"));
    assert!(html.contains("Kept content"));
    assert_eq!(app.posts.len(), 0);
}

#[tokio::test]
async fn test_missing_content_rerenders_form() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/post/new")
        .form(&[("title", "Only a title")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("invalid-feedback"));
    assert_eq!(app.posts.len(), 0);
}

#[tokio::test]
async fn test_title_over_100_chars_is_rejected() {
    let app = common::spawn_app();
    let long_title = "a".repeat(101);

    let response = app
        .server
        .post("/post/new")
        .form(&PostForm {
            title: &long_title,
            content: "Body",
        })
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("invalid-feedback"));
    assert_eq!(app.posts.len(), 0);
}

#[tokio::test]
async fn test_title_of_exactly_100_chars_is_accepted() {
    let app = common::spawn_app();
    let title = "b".repeat(100);

    app.server
        .post("/post/new")
        .form(&PostForm {
            title: &title,
            content: "Body",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(app.posts.len(), 1);
}

#[tokio::test]
async fn test_padded_title_within_limit_is_accepted() {
    let app = common::spawn_app();
    let title = format!("  {}  ", "t".repeat(99));

    app.server
        .post("/post/new")
        .form(&PostForm {
            title: &title,
            content: "Body",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let posts = app.posts.all();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "t".repeat(99));
}
