//! Integration tests for the course API server
//!
//! Covers the identity probe, the summary payload, path normalization
//! as seen over HTTP, and the read-once behavior of the course data.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use courseable::core::types::{Summary, SENTINEL};
use courseable::server::already_running;
use courseable::CourseableError;
use tower::ServiceExt;

use common::{
    free_port, spawn_router, spawn_server, test_app, test_config, CourseFile, SAMPLE_COURSE_COUNT,
};

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_root_answers_exact_sentinel() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    // Byte-exact: no trailing newline, no JSON quoting
    assert_eq!(body, SENTINEL.as_bytes());
}

#[tokio::test]
async fn test_reset_answers_ok() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let (status, body) = get(app, "/reset/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"200: OK");
}

#[tokio::test]
async fn test_summary_lists_every_course() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/summary/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json; charset=utf-8")
    );

    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    let summaries: Vec<Summary> = serde_json::from_slice(&body).unwrap();
    assert_eq!(summaries.len(), SAMPLE_COURSE_COUNT);
    assert_eq!(summaries[0].subject, "CS");
    assert_eq!(summaries[0].number, "124");
}

#[tokio::test]
async fn test_summary_strips_descriptions() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let (_, body) = get(app, "/summary/").await;
    let text = String::from_utf8(body).unwrap();

    assert!(!text.contains("description"));
    assert!(text.contains("Discrete Structures"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let (status, body) = get(app, "/enrollment/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"404: Not Found");
}

#[tokio::test]
async fn test_unsupported_method_is_not_found() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_slashes_reach_the_same_route() {
    let file = CourseFile::sample();
    let config = test_config(&file.path, 0);

    let (canonical_status, canonical_body) = get(test_app(&config), "/summary/").await;
    let (sloppy_status, sloppy_body) = get(test_app(&config), "//summary//").await;

    assert_eq!(canonical_status, StatusCode::OK);
    assert_eq!(sloppy_status, canonical_status);
    assert_eq!(sloppy_body, canonical_body);
}

#[tokio::test]
async fn test_query_string_is_not_found() {
    let file = CourseFile::sample();
    let app = test_app(&test_config(&file.path, 0));

    let (status, _) = get(app, "/summary/?live=true").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_are_byte_identical_across_requests() {
    let file = CourseFile::sample();
    let config = test_config(&file.path, 0);
    let app = test_app(&config);

    let (_, first) = get(app.clone(), "/summary/").await;
    let (_, second) = get(app, "/summary/").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_source_file_is_read_only_once() {
    let file = CourseFile::sample();
    let config = test_config(&file.path, 0);
    let app = test_app(&config);

    let (_, before) = get(app.clone(), "/summary/").await;

    // With the source gone, only the startup snapshot can answer
    file.delete();
    let (status, after) = get(app, "/summary/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_missing_data_file_fails_startup() {
    let file = CourseFile::sample();
    let mut config = test_config(&file.path, 0);
    config.server.data_file = file.path.with_file_name("absent.json");

    let result = courseable::Server::new(config).bind().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_served_over_a_real_socket() {
    let file = CourseFile::sample();
    let server = spawn_server(test_config(&file.path, 0)).await;
    let base = format!("http://{}", server.addr());

    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    assert_eq!(body, SENTINEL);

    let text = reqwest::get(format!("{base}/summary/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let summaries: Vec<Summary> = serde_json::from_str(&text).unwrap();
    assert_eq!(summaries.len(), SAMPLE_COURSE_COUNT);
}

#[tokio::test]
async fn test_already_running_sees_our_server() {
    let file = CourseFile::sample();
    let server = spawn_server(test_config(&file.path, 0)).await;
    let config = test_config(&file.path, server.addr().port());

    assert!(already_running(&config).await.unwrap());
}

#[tokio::test]
async fn test_already_running_sees_nothing() {
    let file = CourseFile::sample();
    let config = test_config(&file.path, free_port());

    assert!(!already_running(&config).await.unwrap());
}

#[tokio::test]
async fn test_already_running_refuses_foreign_port() {
    use axum::routing::get as get_route;

    let foreign = axum::Router::new().route("/", get_route(|| async { "enrollment portal" }));
    let (addr, _task) = spawn_router(foreign).await;

    let file = CourseFile::sample();
    let config = test_config(&file.path, addr.port());

    let result = already_running(&config).await;
    assert!(matches!(
        result,
        Err(CourseableError::PortOccupied(port)) if port == addr.port()
    ));
}
