//! Mock content store and form endpoint for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// Decoded `query` parameter, for content reads.
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{"ok": true}"#)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// Query envelope wrapping `document`.
    pub fn document(document: serde_json::Value) -> Self {
        Self::json(&serde_json::json!({ "query": "*", "result": document, "ms": 1 }).to_string())
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    documents: Arc<Mutex<HashMap<String, MockResponse>>>,
    form_responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Serves GROQ reads by document type and accepts form POSTs.
pub struct MockCms {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCms {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            documents: Arc::new(Mutex::new(HashMap::new())),
            form_responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Answer reads of `doc_type` with `resp`. Unset types answer `null`.
    pub async fn set_document(&self, doc_type: &str, resp: MockResponse) {
        self.state
            .documents
            .lock()
            .await
            .insert(doc_type.to_string(), resp);
    }

    /// Enqueue a response for the next form POST.
    pub async fn enqueue_form_response(&self, resp: MockResponse) {
        self.state.form_responses.lock().await.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn form_url(&self) -> String {
        format!("http://{}/f/test-form", self.addr)
    }
}

impl Drop for MockCms {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Pull the document type out of `*[_type == "about"][0]{..}`.
fn doc_type_of(query: &str) -> Option<String> {
    let start = query.find("_type == \"")? + "_type == \"".len();
    let len = query[start..].find('"')?;
    Some(query[start..start + len].to_string())
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().and_then(|raw| {
        reqwest::Url::parse(&format!("http://mock/?{raw}"))
            .ok()?
            .query_pairs()
            .find(|(k, _)| k == "query")
            .map(|(_, v)| v.into_owned())
    });
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path,
        query: query.clone(),
        headers,
        body,
    });

    let mock_resp = if method == Method::POST {
        state
            .form_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_default()
    } else {
        let doc_type = query.as_deref().and_then(doc_type_of);
        let documents = state.documents.lock().await;
        doc_type
            .and_then(|t| documents.get(&t).cloned())
            .unwrap_or_else(|| MockResponse::document(serde_json::Value::Null))
    };

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(mock_resp.body))
        .unwrap()
}
