// src/state.rs
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::services::provider::{HuggingFaceClient, TextGenerator};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn hugging_face(config: ProviderConfig) -> Self {
        Self::new(Arc::new(HuggingFaceClient::new(config)))
    }
}
