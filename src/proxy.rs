//! Same-origin proxy route: relays `POST /api/chat` to the backend `/ask`,
//! hiding the backend's address from the client.

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&crate::config::backend_url())
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/chat", post(relay_chat))
        .with_state(state)
}

/// Forward the incoming JSON body to `{backend_url}/ask` and relay the
/// result. Backend non-2xx keeps its status with an `error` body; any
/// transport or parse failure degrades to a plain 500.
async fn relay_chat(State(state): State<ProxyState>, body: Bytes) -> (StatusCode, Json<Value>) {
    match forward(&state, &body).await {
        Ok((status, data)) => (status, Json(data)),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        ),
    }
}

async fn forward(state: &ProxyState, body: &[u8]) -> anyhow::Result<(StatusCode, Value)> {
    // No schema validation, but the body must at least be JSON
    let payload: Value = serde_json::from_slice(body)?;

    let url = format!("{}/ask", state.backend_url);
    let response = state.http.post(&url).json(&payload).send().await?;

    if !response.status().is_success() {
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Ok((status, json!({ "error": "Backend error" })));
    }

    let data: Value = response.json().await?;
    Ok((StatusCode::OK, data))
}

/// Bind `addr` and serve the proxy router until the process exits.
pub async fn serve(addr: &str, state: ProxyState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Proxy listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
