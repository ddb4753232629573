//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_cms;

use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use folio::config::{Config, ContentConfig};
use folio::content::{ContentError, ContentStore, HttpContentStore, Query};
use parking_lot::Mutex;
use serde_json::Value;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointed at a local mock server.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.content = ContentConfig {
        project_id: "test".into(),
        api_host: Some(base_url.to_string()),
        ..ContentConfig::default()
    };
    config
}

pub fn http_store(base_url: &str) -> HttpContentStore {
    let config = config_for(base_url);
    HttpContentStore::new(&config.content, &config.network).expect("client builds")
}

/// Canned answer for one document type.
#[derive(Clone)]
pub enum Canned {
    Document(Value),
    Null,
    Fail(u16),
    /// Answer after a delay.
    Slow(Duration, Value),
}

/// In-memory store answering by document type. Unknown types read as null.
#[derive(Default)]
pub struct StaticStore {
    answers: HashMap<&'static str, Canned>,
    seen: Mutex<Vec<String>>,
}

impl StaticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, doc_type: &'static str, answer: Canned) -> Self {
        self.answers.insert(doc_type, answer);
        self
    }

    /// GROQ text of every query received, in arrival order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

impl ContentStore for StaticStore {
    async fn fetch(&self, query: &Query) -> Result<Option<Value>, ContentError> {
        self.seen.lock().push(query.to_groq());
        match self.answers.get(query.doc_type).cloned() {
            Some(Canned::Document(value)) => Ok(Some(value)),
            Some(Canned::Slow(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(Some(value))
            }
            Some(Canned::Fail(status)) => Err(ContentError::Status {
                status,
                message: "mock failure".into(),
            }),
            Some(Canned::Null) | None => Ok(None),
        }
    }
}
