//! Tests for the HTTP server module.

use std::{
    io::Write,
    net::TcpStream,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use steprun_core::{RandomSource, SimulatorBuilder, SimulatorConfig, StepKind, Terminator};
use tower::ServiceExt;

use super::*;

/// Always draws zero: failures, zero delays and crashes.
struct ZeroRandom;

impl RandomSource for ZeroRandom {
    fn below(&self, _bound: u64) -> u64 {
        0
    }
}

#[derive(Default)]
struct CountingTerminator {
    calls: AtomicUsize,
}

impl Terminator for CountingTerminator {
    fn terminate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Helper function to create a router over a crash-free simulator
fn create_test_router() -> Router {
    let simulator = SimulatorBuilder::new()
        .with_config(SimulatorConfig::without_crashes())
        .build();
    router(Arc::new(simulator))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(TRIGGER_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

#[tokio::test]
async fn test_build_step_returns_simulated_outcome() {
    let response = create_test_router()
        .oneshot(post_json(
            r#"{"step_name":"build","repo_path":"/r","commit_hash":"abc123","simulate_status":"Failure","simulate_build_time":10}"#,
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let json: serde_json::Value =
        serde_json::from_str(&body_text(response).await).expect("Response is not JSON");
    assert_eq!(json["status"], "Failure");
    assert!(json["duration_ms"].as_u64().expect("duration_ms is not an integer") >= 10);

    let logs = json["build_logs"].as_str().expect("build_logs is not a string");
    assert!(logs.contains("Repo path: /r"));
    assert!(logs.contains("Commit hash: abc123"));
    assert!(logs.contains("Building..."));
    assert!(logs.contains("Simulating build for step 'build'..."));
    assert!(logs.contains("Step 'build' completed with status: Failure"));
}

#[tokio::test]
async fn test_lint_step_succeeds() {
    let response = create_test_router()
        .oneshot(post_json(
            r#"{"step_name":"lint","repo_path":"/r","commit_hash":"abc"}"#,
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_text(response).await).expect("Response is not JSON");
    assert_eq!(json["status"], "Success");
}

#[tokio::test]
async fn test_body_is_parsed_without_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri(TRIGGER_PATH)
        .body(Body::from(
            r#"{"step_name":"test","repo_path":"/r","commit_hash":"abc","simulate_status":"Success","simulate_build_time":0}"#,
        ))
        .expect("Failed to build request");

    let response = create_test_router()
        .oneshot(request)
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let request = Request::builder()
            .method(method.clone())
            .uri(TRIGGER_PATH)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = create_test_router()
            .oneshot(request)
            .await
            .expect("Request failed");

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} should be rejected"
        );
        assert_eq!(body_text(response).await, "Invalid request method");
    }
}

#[tokio::test]
async fn test_malformed_payload_is_bad_request() {
    for body in [
        "not json",
        "",
        r#"{"step_name":"build","repo_path":"/r"}"#,
        r#"{"step_name":"build","repo_path":"/r","commit_hash":"a","simulate_build_time":"soon"}"#,
    ] {
        let response = create_test_router()
            .oneshot(post_json(body))
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
        assert!(body_text(response).await.starts_with("Malformed payload"));
    }
}

#[tokio::test]
async fn test_unknown_step_is_distinct_rejection() {
    let response = create_test_router()
        .oneshot(post_json(
            r#"{"step_name":"package","repo_path":"/r","commit_hash":"abc"}"#,
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(response).await, "Unknown step 'package'!");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/step/run")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = create_test_router()
        .oneshot(request)
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_crash_without_exit_is_server_error() {
    let terminator = Arc::new(CountingTerminator::default());
    let simulator = SimulatorBuilder::new()
        .with_random(Arc::new(ZeroRandom))
        .with_terminator(terminator.clone())
        .build();

    let response = router(Arc::new(simulator))
        .oneshot(post_json(
            r#"{"step_name":"test","repo_path":"/r","commit_hash":"abc","simulate_build_time":0}"#,
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(terminator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_client_disconnect_does_not_cancel_step() {
    let simulator = Arc::new(
        SimulatorBuilder::new()
            .with_config(SimulatorConfig::without_crashes())
            .build(),
    );
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = router(simulator.clone());
    tokio::spawn(async move { axum::serve(listener, app).await });

    let body = r#"{"step_name":"build","repo_path":"/r","commit_hash":"abc","simulate_status":"Success","simulate_build_time":2000}"#;
    let mut stream = TcpStream::connect(addr).expect("Failed to connect");
    write!(
        stream,
        "POST {TRIGGER_PATH} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
    .expect("Failed to send request");

    tokio::time::sleep(Duration::from_millis(200)).await;
    let gate = simulator.locks().gate(StepKind::Build).unwrap();
    assert!(gate.is_held(), "Build should hold its slot while running");

    drop(stream);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(
        gate.is_held(),
        "Build slot was released when the client hung up"
    );
}

#[test]
fn test_bind_address() {
    assert_eq!(bind_address(":8080"), "0.0.0.0:8080");
    assert_eq!(bind_address("127.0.0.1:9000"), "127.0.0.1:9000");
    assert_eq!(bind_address("localhost:3000"), "localhost:3000");
}
