use axum::http::{header, StatusCode};
use axum::{extract::RawQuery, routing::get, Router};
use std::sync::{Arc, Mutex};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Local stand-in for `GET /search.json` that answers every request the same way
pub struct StubSearchServer {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubSearchServer {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let queries = Arc::new(Mutex::new(Vec::new()));

        let recorded = queries.clone();
        let router = Router::new().route(
            "/search.json",
            get(move |RawQuery(query): RawQuery| {
                let recorded = recorded.clone();
                let body = body.clone();
                async move {
                    recorded.lock().unwrap().push(query.unwrap_or_default());
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            queries,
        }
    }

    /// Raw query strings received so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// A search response body with one doc per title, keyed `/works/OL{n}W`.
pub fn search_body(titles: &[&str]) -> String {
    let docs: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "key": format!("/works/OL{}W", i + 1),
                "title": title,
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965 + i as i64,
                "cover_i": 12345 + i as i64,
            })
        })
        .collect();

    serde_json::json!({ "numFound": docs.len(), "start": 0, "docs": docs }).to_string()
}
