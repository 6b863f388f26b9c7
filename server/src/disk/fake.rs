//! In-process stand-in for the Yandex.Disk API, used by tests.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeDisk {
    listing_status: StatusCode,
    listing_body: String,
    download_status: StatusCode,
    download_body: Option<String>,
    grant_href: bool,
    content_status: StatusCode,
    content_type: Option<&'static str>,
    content: Vec<u8>,
    break_content: bool,
}

impl Default for FakeDisk {
    fn default() -> Self {
        Self {
            listing_status: StatusCode::OK,
            listing_body: r#"{"_embedded": {"items": []}}"#.to_string(),
            download_status: StatusCode::OK,
            download_body: None,
            grant_href: true,
            content_status: StatusCode::OK,
            content_type: Some("application/octet-stream"),
            content: Vec::new(),
            break_content: false,
        }
    }
}

/// A running fake with its base URL and the requests it has seen.
pub struct RunningFake {
    pub base_url: String,
    seen: Arc<Seen>,
}

#[derive(Default)]
struct Seen {
    public_key: Mutex<Option<String>>,
    download_path: Mutex<Option<String>>,
    content_hits: AtomicUsize,
}

#[derive(Clone)]
struct FakeState {
    disk: FakeDisk,
    base_url: String,
    seen: Arc<Seen>,
}

impl FakeDisk {
    pub fn with_listing(mut self, status: StatusCode, body: &str) -> Self {
        self.listing_status = status;
        self.listing_body = body.to_string();
        self
    }

    pub fn without_href(mut self) -> Self {
        self.grant_href = false;
        self
    }

    /// Answer `resources/download` with a fixed status and raw body
    pub fn with_download_response(mut self, status: StatusCode, body: &str) -> Self {
        self.download_status = status;
        self.download_body = Some(body.to_string());
        self
    }

    /// Status of the signed URL response
    pub fn with_content_status(mut self, status: StatusCode) -> Self {
        self.content_status = status;
        self
    }

    /// Send the first half of the content, then fail the stream
    pub fn with_broken_content(mut self, content: &[u8]) -> Self {
        self.content = content.to_vec();
        self.break_content = true;
        self
    }

    pub fn with_content(mut self, content_type: &'static str, content: &[u8]) -> Self {
        self.content_type = Some(content_type);
        self.content = content.to_vec();
        self
    }

    pub fn without_content_type(mut self, content: &[u8]) -> Self {
        self.content_type = None;
        self.content = content.to_vec();
        self
    }

    pub async fn spawn(self) -> RunningFake {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake disk api");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let seen = Arc::new(Seen::default());

        let state = FakeState {
            disk: self,
            base_url: base_url.clone(),
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/public/resources", get(public_resources))
            .route("/resources/download", get(resource_download))
            .route("/content/*name", get(content))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake disk api");
        });

        RunningFake { base_url, seen }
    }
}

impl RunningFake {
    pub fn last_public_key(&self) -> Option<String> {
        self.seen.public_key.lock().unwrap().clone()
    }

    pub fn last_download_path(&self) -> Option<String> {
        self.seen.download_path.lock().unwrap().clone()
    }

    pub fn content_hits(&self) -> usize {
        self.seen.content_hits.load(Ordering::SeqCst)
    }
}

async fn public_resources(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    *state.seen.public_key.lock().unwrap() = query.get("public_key").cloned();
    (
        state.disk.listing_status,
        [(header::CONTENT_TYPE, "application/json")],
        state.disk.listing_body.clone(),
    )
}

async fn resource_download(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    *state.seen.download_path.lock().unwrap() = query.get("path").cloned();
    if let Some(body) = &state.disk.download_body {
        return (
            state.disk.download_status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response();
    }
    let body = if state.disk.grant_href {
        serde_json::json!({
            "href": format!("{}/content/signed", state.base_url),
            "method": "GET",
            "templated": false,
        })
    } else {
        serde_json::json!({ "method": "GET", "templated": false })
    };
    (state.disk.download_status, axum::Json(body)).into_response()
}

async fn content(State(state): State<FakeState>, Path(_name): Path<String>) -> axum::response::Response {
    state.seen.content_hits.fetch_add(1, Ordering::SeqCst);
    let mut builder = axum::response::Response::builder().status(state.disk.content_status);
    if let Some(content_type) = state.disk.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let body = if state.disk.break_content {
        let content = state.disk.content.clone();
        let stream = async_stream::stream! {
            let head = content[..content.len() / 2].to_vec();
            yield Ok::<_, std::io::Error>(axum::body::Bytes::from(head));
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            yield Err(std::io::Error::new(std::io::ErrorKind::Other, "connection reset"));
        };
        axum::body::Body::from_stream(stream)
    } else {
        axum::body::Body::from(state.disk.content.clone())
    };

    builder.body(body).expect("fake content response")
}
