//! Test utilities for action testing
//!
//! Provides a mock HTTP server and an in-memory clipboard.

use anyhow::Result;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use launchkit_core::LaunchError;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::clipboard::ClipboardProvider;

/// Payload served at `/json`; keys are deliberately not sorted.
pub const OBJECT_BODY: &str =
    r#"{"current_user_url": "https://api.github.com/user", "zeta": "last?", "alpha": [1, 2, 3]}"#;

/// Mock server implementation
#[derive(Debug)]
pub struct MockServer {
    port: u16,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self {
            port: 0, // Will be assigned when server starts
        }
    }

    /// Start the mock server and return the address
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = Self::create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok((self, server_url))
    }

    fn create_router() -> Router {
        Router::new()
            .route("/json", get(json_handler))
            .route("/array", get(array_handler))
            .route("/text", get(text_handler))
            .route("/empty", get(empty_handler))
            .route("/error", get(error_handler))
            .route("/moved", get(moved_handler))
            .route("/slow", get(slow_handler))
            .route("/user-agent", get(user_agent_handler))
    }
}

/// A local port with nothing listening on it.
pub async fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

// Handler functions

async fn json_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OBJECT_BODY)
}

async fn array_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], r#"[1, "two", null, false]"#)
}

async fn text_handler() -> &'static str {
    "this is not json"
}

async fn empty_handler() -> StatusCode {
    StatusCode::OK
}

async fn error_handler() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "{\"error\": \"boom\"}")
}

async fn moved_handler() -> Redirect {
    Redirect::temporary("/array")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "{}"
}

async fn user_agent_handler(headers: HeaderMap) -> Json<serde_json::Value> {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(serde_json::json!({ "user_agent": agent }))
}

/// In-memory clipboard recording every access.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub content: String,
    pub reads: usize,
    pub writes: usize,
    pub fail_read: bool,
    pub fail_write: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            ..Self::default()
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, LaunchError> {
        self.reads += 1;
        if self.fail_read {
            return Err(LaunchError::Clipboard("clipboard unavailable".to_string()));
        }
        Ok(self.content.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), LaunchError> {
        self.writes += 1;
        if self.fail_write {
            return Err(LaunchError::Clipboard("clipboard occupied".to_string()));
        }
        self.content = text.to_string();
        Ok(())
    }
}
