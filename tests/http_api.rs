use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use media_browser::{AppState, Config, OpenError, OpenTarget, OsOpener, router};
use serde_json::{Value, json};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tempfile::TempDir;
use tower::ServiceExt;

#[derive(Default)]
struct RecordingOpener {
    calls: Mutex<Vec<(OpenTarget, PathBuf)>>,
    fail: bool,
}

impl RecordingOpener {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(OpenTarget, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl OsOpener for RecordingOpener {
    fn open(&self, target: OpenTarget, path: &Path) -> Result<(), OpenError> {
        self.calls.lock().unwrap().push((target, path.to_path_buf()));
        if self.fail {
            return Err(OpenError::Launch {
                program: "fake-open".to_string(),
                source: std::io::Error::other("no display"),
            });
        }
        Ok(())
    }
}

fn touch(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn app(scan_path: Option<&Path>, opener: Arc<RecordingOpener>) -> Router {
    let config = Config::new()
        .with_port(3000)
        .with_scan_path(scan_path.map(Path::to_path_buf));
    router(AppState::with_opener(config, opener))
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn test_options_on_any_path_is_empty_ok() {
    let app = app(None, Arc::default());
    for uri in ["/", "/api/scan", "/api/open-file", "/some/where/else.png"] {
        let response = send(&app, "OPTIONS", uri, "").await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_cors(&response);
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_config_without_scan_path_names_missing_setting() {
    let app = app(None, Arc::default());
    let response = send(&app, "GET", "/api/config", "").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_cors(&response);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("SCAN_PATH"));
}

#[tokio::test]
async fn test_config_reports_port_and_scan_path() {
    let temp = TempDir::new().unwrap();
    let app = app(Some(temp.path()), Arc::default());
    let response = send(&app, "GET", "/api/config", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["port"], 3000);
    assert_eq!(body["scanPath"], temp.path().display().to_string());
}

#[tokio::test]
async fn test_scan_without_root_is_server_error() {
    let app = app(None, Arc::default());
    let response = send(&app, "GET", "/api/scan", "").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_scan_of_empty_directory() {
    let temp = TempDir::new().unwrap();
    let app = app(Some(temp.path()), Arc::default());
    let response = send(&app, "GET", "/api/scan", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "baseDir": temp.path().display().to_string(),
            "data": { "files": [], "folders": [] }
        })
    );
}

#[tokio::test]
async fn test_scan_returns_tree() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "cover.jpg", b"jpg");
    touch(temp.path(), "readme.md", b"");
    touch(temp.path(), "music/track.flac", b"flac");
    touch(temp.path(), "node_modules/icon.png", b"");

    let app = app(Some(temp.path()), Arc::default());
    let body = body_json(send(&app, "GET", "/api/scan", "").await).await;
    let data = &body["data"];

    assert_eq!(data["files"].as_array().unwrap().len(), 1);
    assert_eq!(data["files"][0]["path"], "cover.jpg");
    assert_eq!(data["files"][0]["type"], "image");
    assert_eq!(data["files"][0]["size"], 3);

    let folders = data["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "music");
    assert_eq!(folders[0]["items"]["files"][0]["path"], "music/track.flac");
    assert_eq!(folders[0]["items"]["files"][0]["type"], "audio");
}

#[tokio::test]
async fn test_concurrent_scans_agree() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "a/b/c.mp4", b"");
    touch(temp.path(), "a/d.png", b"");
    touch(temp.path(), "e.wav", b"");

    let app = app(Some(temp.path()), Arc::default());
    let (first, second) = tokio::join!(
        send(&app, "GET", "/api/scan", ""),
        send(&app, "GET", "/api/scan", "")
    );
    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn test_media_is_streamed() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "photos/summer day.webp", b"webp bytes");

    let app = app(Some(temp.path()), Arc::default());
    let response = send(&app, "GET", "/photos/summer%20day.webp", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/webp");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );
    assert_eq!(body_bytes(response).await, b"webp bytes");
}

#[tokio::test]
async fn test_missing_media_is_not_found() {
    let temp = TempDir::new().unwrap();
    let app = app(Some(temp.path()), Arc::default());
    let response = send(&app, "GET", "/nonexistent.png", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_media_without_root_is_server_error() {
    let app = app(None, Arc::default());
    let response = send(&app, "GET", "/cat.png", "").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_media_traversal_is_rejected() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "secret.png", b"secret");
    std::fs::create_dir(temp.path().join("root")).unwrap();

    let app = app(Some(&temp.path().join("root")), Arc::default());
    let response = send(&app, "GET", "/..%2Fsecret.png", "").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_open_file_rejects_traversal() {
    let temp = TempDir::new().unwrap();
    let opener = Arc::new(RecordingOpener::default());
    let app = app(Some(temp.path()), opener.clone());

    let response = send(
        &app,
        "POST",
        "/api/open-file",
        r#"{"path":"../../etc/passwd"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_json(response).await["error"].is_string());
    assert!(opener.calls().is_empty());
}

#[tokio::test]
async fn test_open_file_with_bad_body() {
    let temp = TempDir::new().unwrap();
    let opener = Arc::new(RecordingOpener::default());
    let app = app(Some(temp.path()), opener.clone());

    for body in ["not json", r#"{"file":"a.png"}"#, ""] {
        let response = send(&app, "POST", "/api/open-file", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid request" })
        );
    }
    assert!(opener.calls().is_empty());
}

#[tokio::test]
async fn test_open_file_invokes_opener() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "clips/a.mp4", b"");
    let opener = Arc::new(RecordingOpener::default());
    let app = app(Some(temp.path()), opener.clone());

    let response = send(&app, "POST", "/api/open-file", r#"{"path":"clips/a.mp4"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let calls = opener.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, OpenTarget::File);
    assert_eq!(
        calls[0].1,
        temp.path().join("clips/a.mp4").canonicalize().unwrap()
    );
}

#[tokio::test]
async fn test_open_folder_failure_is_server_error() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("albums")).unwrap();
    let opener = Arc::new(RecordingOpener::failing());
    let app = app(Some(temp.path()), opener.clone());

    let response = send(&app, "POST", "/api/open-folder", r#"{"path":"albums"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to open folder" })
    );
    assert_eq!(opener.calls()[0].0, OpenTarget::Folder);
}

#[tokio::test]
async fn test_open_missing_target_is_server_error() {
    let temp = TempDir::new().unwrap();
    let opener = Arc::new(RecordingOpener::default());
    let app = app(Some(temp.path()), opener.clone());

    let response = send(&app, "POST", "/api/open-file", r#"{"path":"gone.png"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to open file" })
    );
    assert!(opener.calls().is_empty());
}

#[tokio::test]
async fn test_landing_page() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "index.html", b"<h1>media</h1>");
    let config = Config::new()
        .with_port(3000)
        .with_index_path(temp.path().join("index.html"));
    let app = router(AppState::with_opener(config, Arc::new(RecordingOpener::default())));

    for uri in ["/", "/index.html"] {
        let response = send(&app, "GET", uri, "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(body_bytes(response).await, b"<h1>media</h1>");
    }
}

#[tokio::test]
async fn test_missing_landing_page_is_not_found() {
    let temp = TempDir::new().unwrap();
    let config = Config::new()
        .with_port(3000)
        .with_index_path(temp.path().join("missing.html"));
    let app = router(AppState::with_opener(config, Arc::new(RecordingOpener::default())));

    let response = send(&app, "GET", "/", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_routes_are_json_not_found() {
    let temp = TempDir::new().unwrap();
    let app = app(Some(temp.path()), Arc::default());

    for (method, uri) in [
        ("GET", "/api/unknown"),
        ("POST", "/api/scan"),
        ("DELETE", "/api/config"),
        ("GET", "/api/open-file"),
        ("PUT", "/cat.png"),
    ] {
        let response = send(&app, method, uri, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
    }
}
