// file: src/testing.rs
// description: in-process Readeck stand-in for exercising the HTTP paths in tests
// reference: https://docs.rs/axum

use crate::client::ReadeckClient;
use crate::config::Config;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const FIXTURE_TOKEN: &str = "test-token";

pub struct FixtureStore {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FixtureStore {
    pub async fn spawn() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/api/bookmarks", get(list_bookmarks))
            .route("/api/bookmarks/{id}/article", get(article))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("axum serve");
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    /// Number of API requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn client_for(base_url: &str) -> ReadeckClient {
    let config = Config::new(base_url, FIXTURE_TOKEN)
        .and_then(|c| c.with_request_timeout(5))
        .unwrap();
    ReadeckClient::new(Arc::new(config)).unwrap()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", FIXTURE_TOKEN))
}

fn rust_records() -> Vec<Value> {
    vec![
        json!({
            "id": "rust-1",
            "title": "Understanding Ownership",
            "description": "How Rust manages memory without a garbage collector",
            "url": "https://blog.example.com/ownership",
            "labels": ["rust"]
        }),
        json!({
            "id": "rust-2",
            "title": "Fearless Concurrency",
            "url": "https://blog.example.com/concurrency"
        }),
        json!({
            "id": "rust-3",
            "title": "Error Handling",
            "description": null
        }),
    ]
}

async fn list_bookmarks(
    State(hits): State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }

    let param = |key: &str| params.get(key).map(String::as_str);
    if param("has_errors") != Some("false") || param("offset") != Some("0") {
        return (StatusCode::BAD_REQUEST, "unexpected paging").into_response();
    }

    let limit: usize = param("limit").and_then(|l| l.parse().ok()).unwrap_or(10);

    match param("search").unwrap_or_default() {
        "rust" => axum::Json(rust_records().into_iter().take(limit).collect::<Vec<_>>())
            .into_response(),
        // ignores the limit on purpose
        "overflow" => axum::Json(
            (0..limit + 5)
                .map(|i| json!({"id": format!("overflow-{}", i), "title": format!("Entry {}", i)}))
                .collect::<Vec<_>>(),
        )
        .into_response(),
        "broken" => (StatusCode::OK, "{\"id\": ").into_response(),
        "explode" => (StatusCode::INTERNAL_SERVER_ERROR, "index unavailable").into_response(),
        _ => axum::Json(Vec::<Value>::new()).into_response(),
    }
}

async fn article(
    State(hits): State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }

    let html = |body: Vec<u8>| ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body);

    match id.as_str() {
        "rust-1" => html(
            concat!(
                "<section><h1>Ownership</h1>",
                "<p>Each value has an <a href=\"https://doc.rust-lang.org/book\">owner</a>.</p>",
                "<p><img src=\"/img/diagram.png\" alt=\"diagram\"></p>",
                "<ul><li>Moves</li><li>Borrows</li></ul></section>"
            )
            .as_bytes()
            .to_vec(),
        )
        .into_response(),
        "rust-2" => html(b"<p>Threads and <strong>channels</strong>.</p>".to_vec()).into_response(),
        "rust-3" => html(b"<p>Use <code>Result</code>.</p>".to_vec()).into_response(),
        "binary" => html(vec![0xff, 0xfe, 0x00, 0x9f]).into_response(),
        _ => (StatusCode::NOT_FOUND, "bookmark not found").into_response(),
    }
}
