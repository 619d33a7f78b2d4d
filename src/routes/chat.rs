use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay::handle_chat,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        // Malformed bodies get the same generic 500 as provider failures.
        let Json(payload) = payload.map_err(|rejection| {
            tracing::error!(error = %rejection, "could not read chat request body");
            AppError::from(rejection)
        })?;

        tracing::info!(message_len = payload.message.len(), "relaying chat message");

        let exchange = handle_chat(state.generator.as_ref(), payload.message)
            .await
            .map_err(|err| {
                // Full detail stays in the log; the caller only gets the generic body.
                tracing::error!(error = %err, "error communicating with inference provider");
                AppError::from(err)
            })?;

        Ok::<_, AppError>(Json(ChatResponse {
            reply: exchange.reply_text,
        }))
    }
    .instrument(span)
    .await
}
