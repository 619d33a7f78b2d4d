use async_trait::async_trait;
use thiserror::Error;

use crate::message::{ChatRequest, ChatResponse};

/// Any failure in the exchange between the controller and the relay server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay answered {0}")]
    Status(reqwest::StatusCode),

    #[error("relay reply was not understood: {0}")]
    Body(String),
}

/// How the controller reaches the relay.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}

/// `POST <base_url>/chat` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let bytes = response.bytes().await?;
        let body: ChatResponse =
            serde_json::from_slice(&bytes).map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(body.reply)
    }
}
