//! Integration tests for the proxy route: real axum servers on ephemeral
//! ports, a stub backend behind `/ask`, and reqwest driving `/api/chat`.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use ragchat::proxy::{self, ProxyState};

/// Bind a router on an ephemeral port and return its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub backend that echoes the question back inside the answer.
fn echo_backend() -> Router {
    Router::new().route(
        "/ask",
        post(|Json(body): Json<Value>| async move {
            let question = body["question"].as_str().unwrap_or_default().to_string();
            Json(json!({ "answer": format!("echo: {}", question) }))
        }),
    )
}

async fn spawn_proxy(backend_url: &str) -> String {
    spawn_server(proxy::router(ProxyState::new(backend_url))).await
}

#[tokio::test]
async fn forwards_body_and_relays_backend_answer() {
    let backend_url = spawn_server(echo_backend()).await;
    let proxy_url = spawn_proxy(&backend_url).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", proxy_url))
        .json(&json!({ "question": "What is RAG?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "answer": "echo: What is RAG?" }));
}

#[tokio::test]
async fn relays_extra_backend_fields_verbatim() {
    let backend = Router::new().route(
        "/ask",
        post(|| async {
            Json(json!({ "answer": "42", "sources": ["doc.pdf"], "latency_ms": 7 }))
        }),
    );
    let backend_url = spawn_server(backend).await;
    let proxy_url = spawn_proxy(&backend_url).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{}/api/chat", proxy_url))
        .json(&json!({ "question": "q" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({ "answer": "42", "sources": ["doc.pdf"], "latency_ms": 7 })
    );
}

#[tokio::test]
async fn backend_error_keeps_status_with_error_body() {
    let backend = Router::new().route(
        "/ask",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
    );
    let backend_url = spawn_server(backend).await;
    let proxy_url = spawn_proxy(&backend_url).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/chat", proxy_url))
        .json(&json!({ "question": "q" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Backend error" }));
}

#[tokio::test]
async fn unreachable_backend_returns_internal_server_error() {
    // Bind then drop a listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let proxy_url = spawn_proxy(&dead_url).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/chat", proxy_url))
        .json(&json!({ "question": "q" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn malformed_request_body_returns_internal_server_error() {
    let backend_url = spawn_server(echo_backend()).await;
    let proxy_url = spawn_proxy(&backend_url).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/chat", proxy_url))
        .header("Content-Type", "application/json")
        .body("this is not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn non_json_backend_success_returns_internal_server_error() {
    let backend = Router::new().route("/ask", post(|| async { "<html>oops</html>" }));
    let backend_url = spawn_server(backend).await;
    let proxy_url = spawn_proxy(&backend_url).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/chat", proxy_url))
        .json(&json!({ "question": "q" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}
