// src/services/sanitize.rs

/// Reply length cap, counted in Unicode scalar values (`char`s). This differs
/// from a UTF-16 code unit count only for characters outside the Basic
/// Multilingual Plane: 100 emoji fit here where a UTF-16 cut would keep 50.
pub const MAX_REPLY_CHARS: usize = 100;
pub const REPEAT_ARTIFACT: &str = "b.";
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand that. Can you ask again?";

/// Clean raw model output into the reply shown to the user.
///
/// Trim, cut to `MAX_REPLY_CHARS` characters, drop every `b.` artifact, swap
/// in the fallback when nothing useful is left, then end with a period. The
/// period is appended unconditionally, so the fallback ends in `?.`.
pub fn sanitize_reply(raw: &str) -> String {
    let trimmed = raw.trim();

    let truncated: String = trimmed.chars().take(MAX_REPLY_CHARS).collect();

    let mut body = truncated.replace(REPEAT_ARTIFACT, "");

    if body.is_empty() || body == "." {
        body = FALLBACK_REPLY.to_string();
    }

    body.push('.');
    body
}
