use super::transcript::Transcript;
use super::transport::{RelayTransport, TransportError};

pub const TRANSPORT_FALLBACK: &str = "Sorry, something went wrong. Please try again later.";

/// A submitted message waiting to be sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub seq: u64,
    pub message: String,
}

impl PendingSend {
    pub async fn dispatch(self, transport: &dyn RelayTransport) -> Completion {
        let outcome = transport.send(&self.message).await;
        Completion {
            seq: self.seq,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct Completion {
    pub seq: u64,
    pub outcome: Result<String, TransportError>,
}

/// Owns the input field and the transcript and turns sends into transcript entries.
///
/// Each submit gets the next sequence number and reserves a reply slot right
/// after the user's entry, so overlapping sends can resolve in any order
/// without replies landing next to the wrong message.
#[derive(Debug, Default)]
pub struct ChatController {
    input: String,
    transcript: Transcript,
    next_seq: u64,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Take the input field, record it, and hand back the request to dispatch.
    /// Blank input is ignored and leaves the field untouched.
    pub fn submit(&mut self) -> Option<PendingSend> {
        let message = self.input.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();

        let seq = self.next_seq;
        self.next_seq += 1;

        self.transcript.push_user(seq, message.clone());
        self.transcript.reserve_reply(seq);
        self.input.clear();

        Some(PendingSend { seq, message })
    }

    pub fn resolve(&mut self, completion: Completion) {
        let text = match completion.outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(seq = completion.seq, error = %err, "relay request failed");
                TRANSPORT_FALLBACK.to_string()
            }
        };

        if !self.transcript.fill_reply(completion.seq, text) {
            tracing::warn!(seq = completion.seq, "reply arrived for an unknown send");
        }
    }

    /// Submit and wait for the reply in one go.
    pub async fn send_message(&mut self, transport: &dyn RelayTransport) {
        if let Some(pending) = self.submit() {
            let completion = pending.dispatch(transport).await;
            self.resolve(completion);
        }
    }
}
