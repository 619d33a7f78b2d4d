// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// The only text a caller ever sees when the relay fails.
pub const GENERIC_FAILURE: &str =
    "An error occurred while processing your request. Please try again later.";

/// Any failure obtaining or parsing generated text from the inference provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no provider credential configured (set HF_API_KEY)")]
    MissingCredential,

    #[error("request to provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected provider response shape: {0}")]
    Decode(String),

    #[error("provider returned no candidates")]
    NoCandidates,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("unreadable chat request: {0}")]
    Request(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Provider(_) | AppError::Request(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERIC_FAILURE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
