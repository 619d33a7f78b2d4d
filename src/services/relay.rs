// src/services/relay.rs
use crate::error::ProviderError;
use crate::message::ChatExchange;

use super::provider::TextGenerator;
use super::sanitize::sanitize_reply;

/// Relay one user message through the generator and sanitize the first candidate.
///
/// The text is forwarded as-is; no length or content checks happen here.
pub async fn handle_chat(
    generator: &dyn TextGenerator,
    user_text: String,
) -> Result<ChatExchange, ProviderError> {
    let candidates = generator.generate(&user_text).await?;
    let first = candidates.first().ok_or(ProviderError::NoCandidates)?;

    tracing::debug!(raw_len = first.generated_text.len(), "provider returned candidate");

    Ok(ChatExchange {
        reply_text: sanitize_reply(&first.generated_text),
        user_text,
    })
}
