// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One user message and the sanitized reply produced for it. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user_text: String,
    pub reply_text: String,
}
