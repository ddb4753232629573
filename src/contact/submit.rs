use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::NetworkConfig;
use crate::contact::form::FormState;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Form submission failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Form endpoint responded with status {status}")]
    Status { status: u16 },
}

/// Delivers a validated form to its endpoint.
pub trait FormSubmitter: Send + Sync + 'static {
    fn submit(
        &self,
        endpoint: &str,
        form: &FormState,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// POSTs the form as JSON. Any 2xx counts as delivered.
pub struct HttpSubmitter {
    client: Client,
}

impl HttpSubmitter {
    pub fn new(network: &NetworkConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(network.connect_timeout_seconds as u64))
            .pool_idle_timeout(Duration::from_secs(network.pool_idle_timeout_seconds as u64))
            .build()
            .map_err(|e| SubmitError::Transport { source: e })?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl FormSubmitter for HttpSubmitter {
    async fn submit(&self, endpoint: &str, form: &FormState) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport { source: e })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status {
                status: status.as_u16(),
            })
        }
    }
}
