//! Page rendering with an empty content store
//!
//! Drives the full router as a service with the content client pointed
//! at an unreachable address. Every fetch fails, which must be
//! indistinguishable from an empty store: each page renders 200 with
//! its designated fallback copy, and the contact form round-trips.

use axum::body::Body;
use http::{Request, StatusCode, header};
use tower::Service;
use web_server::core::{Config, ServerState};
use web_server::{ContentClient, routes};

fn test_state() -> ServerState {
    let config = Config::for_tests("testproj");
    // Port 9 (discard) is never listening; every request fails fast
    let content = ContentClient::with_endpoint("http://127.0.0.1:9", &config);
    ServerState::with_content(config, content)
}

async fn get(path: &str) -> (StatusCode, String) {
    let mut app = routes::build_app(&test_state());
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request");
    let response = app.call(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn post_form(path: &str, form_body: &str) -> (StatusCode, String) {
    let mut app = routes::build_app(&test_state());
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .expect("request");
    let response = app.call(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn home_renders_fallback_hero() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Good Coffee Takes Time"));
    assert!(body.contains("House-roasted beans, local ingredients, and a space to slow down."));
    assert!(body.contains("What We&#39;re Pouring") || body.contains("What We're Pouring"));
}

#[tokio::test]
async fn menu_renders_with_no_categories() {
    let (status, body) = get("/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Menu"));
    assert!(body.contains("A note on allergies"));
}

#[tokio::test]
async fn about_renders_fallback_story() {
    let (status, body) = get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Good Coffee Takes Time. So Do Good Things."));
    assert!(body.contains("Maya Chen, Founder"));
}

#[tokio::test]
async fn locations_renders_with_empty_store() {
    let (status, body) = get("/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Find Us"));
    assert!(body.contains("A Note on Parking"));
}

#[tokio::test]
async fn events_renders_empty_state_message() {
    let (status, body) = get("/events").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No upcoming events at the moment. Check back soon!"));
}

#[tokio::test]
async fn contact_page_renders_form() {
    let (status, body) = get("/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Get in Touch"));
    assert!(body.contains("Send Message"));
    assert!(body.contains("hello@emberandoak.coffee"));
}

#[tokio::test]
async fn footer_falls_back_to_static_chrome() {
    let (_, body) = get("/").await;
    assert!(body.contains("Ember &amp; Oak Coffee"));
    assert!(body.contains("3847 SE Division Street, Portland, OR"));
}

#[tokio::test]
async fn contact_post_valid_submission_succeeds() {
    let (status, body) = post_form(
        "/contact",
        "name=Maya&email=maya%40emberandoak.coffee&subject=general&message=I+would+like+to+talk+about+beans.",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("Thanks for reaching out!"));
}

#[tokio::test]
async fn contact_post_short_message_fails() {
    let (status, body) = post_form(
        "/contact",
        "name=Maya&email=maya%40emberandoak.coffee&subject=general&message=too+short",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please enter a longer message (at least 10 characters)."));
    // Failure keeps the form on screen for another attempt
    assert!(body.contains("Send Message"));
}

#[tokio::test]
async fn contact_post_invalid_email_fails() {
    let (_, body) = post_form(
        "/contact",
        "name=Maya&email=foo%40bar&subject=general&message=long+enough+message+here",
    )
    .await;
    assert!(body.contains("Please enter a valid email address."));
}

#[tokio::test]
async fn contact_post_missing_fields_fails() {
    let (_, body) = post_form("/contact", "subject=general").await;
    assert!(body.contains("Please fill in all required fields."));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn assets_are_served_with_content_type() {
    let mut app = routes::build_app(&test_state());
    let request = Request::builder()
        .uri("/assets/site.css")
        .body(Body::empty())
        .expect("request");
    let response = app.call(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let (status, _) = get("/assets/nope.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
