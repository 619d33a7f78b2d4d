// src/services/provider.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::ProviderError;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest<'a> {
    pub inputs: &'a str,
}

/// One generated candidate as returned by the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub generated_text: String,
}

/// Anything that can turn a prompt into generated candidates.
///
/// The relay handler only depends on this trait, so the hosted model can be
/// swapped or stubbed without touching the handler.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<Candidate>, ProviderError>;
}

/// Hugging Face hosted inference client.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl HuggingFaceClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<Candidate>, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        let response = self
            .http
            .post(&self.config.model_url)
            .bearer_auth(api_key)
            .json(&GenerateRequest { inputs: prompt })
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(ProviderError::Transport)?;
        let candidates: Vec<Candidate> =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if candidates.is_empty() {
            return Err(ProviderError::NoCandidates);
        }
        Ok(candidates)
    }
}
