#![cfg(feature = "web")]

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::{create_file, LOGIN_FEATURE};
use featlist::config::ConfigBuilder;
use featlist::errors::Result as FeatResult;
use featlist::opener::{resolve_report_path, FileOpener};
use featlist::web::{create_router, AppState};
use http_body_util::BodyExt; // Requires http-body-util in dev-dependencies
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};
use tower::util::ServiceExt; // for oneshot

/// Records open requests instead of launching an application.
struct RecordingOpener {
    root: PathBuf,
    opened: Mutex<Vec<PathBuf>>,
}

impl FileOpener for RecordingOpener {
    fn open(&self, relative_path: &str) -> FeatResult<()> {
        let path = resolve_report_path(&self.root, relative_path)?;
        self.opened.lock().unwrap().push(path);
        Ok(())
    }
}

struct TestServer {
    _temp: TempDir,
    state: Arc<AppState>,
    opener: Arc<RecordingOpener>,
}

impl TestServer {
    fn new() -> Self {
        let temp = tempdir().unwrap();
        create_file(temp.path(), "a.feature", LOGIN_FEATURE);
        create_file(
            temp.path(),
            "nested/b.feature",
            "@author=Anna\nFeature: B\n  \tScenario: Mixed\n",
        );
        let config = ConfigBuilder::new()
            .scan_root(temp.path().to_str().unwrap())
            .build()
            .unwrap();
        let opener = Arc::new(RecordingOpener {
            root: config.scan_root.clone(),
            opened: Mutex::new(Vec::new()),
        });
        let state = Arc::new(AppState::with_opener(config, opener.clone()));
        Self {
            _temp: temp,
            state,
            opener,
        }
    }

    fn router(&self) -> Router {
        create_router(self.state.clone())
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_and_scripts_are_served() {
    let server = TestServer::new();

    let (status, body) = send(server.router(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("id=\"searchInput\""));
    assert!(html.contains("placeholder=\"Search for features..\""));

    let (status, body) = send(server.router(), get("/filter.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("function applyFilter()"));

    let (status, _) = send(server.router(), get("/studio.js")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(server.router(), get("/missing.png")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_report_before_first_trigger_is_empty() {
    let server = TestServer::new();
    let (status, body) = send(server.router(), get("/api/report")).await;
    assert_eq!(status, StatusCode::OK);

    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["version"], 0);
    assert_eq!(report["pipeline"], Value::Null);
    assert_eq!(report["rows"], 0);
}

#[tokio::test]
async fn test_feature_trigger_renders_surface() {
    let server = TestServer::new();

    let (status, body) = send(server.router(), post_json("/api/scan/features", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    let done: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(done["pipeline"], "feature_list");
    assert_eq!(done["files"], 2);
    // Two appends plus the final render.
    assert_eq!(done["version"], 3);

    let (_, body) = send(server.router(), get("/api/report")).await;
    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["title"], "Features List");
    assert_eq!(report["files"], 2);
    assert_eq!(report["rows"], 3);
    let html = report["html"].as_str().unwrap();
    assert!(html.contains("data-path=\"nested/b.feature\""));
    assert!(html.contains("<td>Anna</td>"));
    // Final render is ordered by path.
    let a = html.find("data-path=\"a.feature\"").unwrap();
    let b = html.find("data-path=\"nested/b.feature\"").unwrap();
    assert!(a < b);
}

#[tokio::test]
async fn test_indentation_trigger_with_overrides() {
    let server = TestServer::new();

    let (status, body) = send(
        server.router(),
        post_json(
            "/api/scan/indentation",
            json!({ "default_indentation": "space" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let done: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(done["pipeline"], "indentation_check");

    let report = server.state.surface().snapshot();
    assert_eq!(report.title, "Indentation Check");
    assert_eq!(report.rows, 2);
    assert!(report.html.contains("<td>in line 3 detected spaces and tabs</td>"));
    assert!(report
        .html
        .contains("<td>inconsistent tabs detected in file lines, spaces expected</td>"));
}

#[tokio::test]
async fn test_hidden_columns_override() {
    let server = TestServer::new();
    let (status, _) = send(
        server.router(),
        post_json(
            "/api/scan/features",
            json!({ "show_author": false, "show_tasks": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let report = server.state.surface().snapshot();
    assert!(!report.html.contains("<th>Author</th>"));
    assert!(!report.html.contains("Anna"));
}

#[tokio::test]
async fn test_empty_body_uses_server_config() {
    let server = TestServer::new();
    let request = Request::builder()
        .method("POST")
        .uri("/api/scan/features")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(server.router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(server.state.surface().snapshot().html.contains("<th>Tasks</th>"));
}

#[tokio::test]
async fn test_malformed_trigger_body_is_rejected() {
    let server = TestServer::new();
    let request = Request::builder()
        .method("POST")
        .uri("/api/scan/features")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(server.router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(server.state.surface().snapshot().version, 0);
}

#[tokio::test]
async fn test_open_file_request() {
    let server = TestServer::new();

    let (status, _) = send(
        server.router(),
        post_json("/api/open", json!({ "path": "nested/b.feature" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        server.router(),
        post_json("/api/open", json!({ "path": "../outside.feature" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8_lossy(&body).contains("Failed to open file"));

    let opened = server.opener.opened.lock().unwrap();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].ends_with("nested/b.feature"));
}

#[tokio::test]
async fn test_events_stream_is_sse() {
    let server = TestServer::new();
    let response = server.router().oneshot(get("/api/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/event-stream"
    );
}

#[tokio::test]
async fn test_render_notifications_are_broadcast() {
    let server = TestServer::new();
    let mut rx = server.state.surface().subscribe();

    let (status, _) = send(server.router(), post_json("/api/scan/features", json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let mut versions = Vec::new();
    while let Ok(version) = rx.try_recv() {
        versions.push(version);
    }
    assert_eq!(versions, vec![1, 2, 3]);
}
