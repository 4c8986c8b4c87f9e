mod common;

use std::fs;

use common::{get, raw, spawn_app, test_state};
use tempfile::tempdir;

#[tokio::test]
async fn serves_the_spa_entry_point_and_assets() {
    let dist = tempdir().expect("tempdir");
    fs::write(
        dist.path().join("index.html"),
        "<!doctype html><title>newsroom</title>",
    )
    .expect("write index");
    fs::write(dist.path().join("app.js"), "console.log(\"up\");").expect("write asset");

    let addr = spawn_app(test_state(dist.path().to_str().expect("utf8 path"))).await;

    let request = format!("GET / HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("<title>newsroom</title>"));

    let request = format!("GET /app.js HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn unknown_paths_fall_through_to_a_404() {
    let dist = tempdir().expect("tempdir");
    let addr = spawn_app(test_state(dist.path().to_str().expect("utf8 path"))).await;

    let request =
        format!("GET /definitely-missing.js HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 404"));

    // Unmatched API paths take the same fallback.
    let request =
        format!("GET /api/v1/nothing HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 404"));
}

#[tokio::test]
async fn health_reports_ok() {
    let dist = tempdir().expect("tempdir");
    let addr = spawn_app(test_state(dist.path().to_str().expect("utf8 path"))).await;

    let (status, body) = get(addr, "/api/v1/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}
