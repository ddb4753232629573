use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ContentConfig, NetworkConfig, SecureString};
use crate::content::error::ContentError;
use crate::content::query::Query;
use crate::content::ContentStore;

/// Query response envelope. Only `result` is consumed.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// Content store reached over the HTTP query API.
///
/// Built once at startup and shared by every section loader.
pub struct HttpContentStore {
    client: Client,
    endpoint: String,
    token: Option<SecureString>,
}

impl HttpContentStore {
    pub fn new(content: &ContentConfig, network: &NetworkConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(network.connect_timeout_seconds as u64))
            .pool_idle_timeout(Duration::from_secs(network.pool_idle_timeout_seconds as u64))
            .build()
            .map_err(|e| ContentError::Transport { source: e })?;

        Ok(Self::with_client(client, content))
    }

    pub fn with_client(client: Client, content: &ContentConfig) -> Self {
        let endpoint = format!(
            "{}/v{}/data/query/{}",
            content.api_base(),
            content.api_version.trim_start_matches('v'),
            content.dataset
        );
        Self {
            client,
            endpoint,
            token: content.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_url(&self, query: &Query) -> Result<Url, ContentError> {
        Url::parse_with_params(&self.endpoint, &[("query", query.to_groq())]).map_err(|e| {
            ContentError::InvalidUrl {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            }
        })
    }
}

impl ContentStore for HttpContentStore {
    async fn fetch(&self, query: &Query) -> Result<Option<Value>, ContentError> {
        let url = self.query_url(query)?;
        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Transport { source: e })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::Transport { source: e })?;

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                message: error_description(&body),
            });
        }

        let envelope: QueryResponse =
            serde_json::from_slice(&body).map_err(|e| ContentError::Decode {
                doc_type: query.doc_type,
                source: e,
            })?;

        Ok(match envelope.result {
            Value::Null => None,
            document => Some(document),
        })
    }
}

/// Pull a human-readable description out of an error body.
///
/// Understands `{"error": {"description": ..}}`, `{"error": "..."}` and
/// `{"message": ".."}`; anything else is returned as text.
fn error_description(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        let described = value
            .pointer("/error/description")
            .or_else(|| value.pointer("/error/message"))
            .or_else(|| value.get("error").filter(|e| e.is_string()))
            .or_else(|| value.get("message"))
            .and_then(Value::as_str);
        if let Some(text) = described {
            return text.to_string();
        }
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        "empty response body".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_project_host_and_version() {
        let content = ContentConfig {
            project_id: "abc123".into(),
            use_cdn: false,
            ..ContentConfig::default()
        };
        let store = HttpContentStore::with_client(Client::new(), &content);
        assert_eq!(
            store.endpoint(),
            "https://abc123.api.sanity.io/v2025-04-01/data/query/production"
        );
    }

    #[test]
    fn endpoint_honors_host_override() {
        let content = ContentConfig {
            api_host: Some("http://127.0.0.1:9000/".into()),
            dataset: "staging".into(),
            ..ContentConfig::default()
        };
        let store = HttpContentStore::with_client(Client::new(), &content);
        assert_eq!(
            store.endpoint(),
            "http://127.0.0.1:9000/v2025-04-01/data/query/staging"
        );
    }

    #[test]
    fn error_description_variants() {
        assert_eq!(
            error_description(br#"{"error":{"description":"bad query","type":"queryParseError"}}"#),
            "bad query"
        );
        assert_eq!(error_description(br#"{"error":"nope"}"#), "nope");
        assert_eq!(error_description(b"gateway down"), "gateway down");
        assert_eq!(error_description(b""), "empty response body");
    }
}
