//! Resolves the text to speak from arguments or hook input

use serde::Deserialize;

use crate::{Error, Result};

/// Phrase spoken when a hook fires without a message
pub const DEFAULT_PHRASE: &str = "The assistant needs attention";

/// Hook event delivered as JSON on stdin
#[derive(Debug, Deserialize)]
struct HookEvent {
    message: Option<String>,
}

/// Resolve the text to speak
///
/// A positional argument wins; otherwise `stdin` (everything read from
/// standard input) is interpreted per [`text_from_stdin`].
///
/// # Errors
///
/// Returns [`Error::Input`] if the resolved text is empty or whitespace-only.
pub fn resolve_text(arg: Option<&str>, stdin: &str) -> Result<String> {
    let text = arg.map_or_else(|| text_from_stdin(stdin), ToString::to_string);

    if text.trim().is_empty() {
        return Err(Error::Input("no text provided".to_string()));
    }

    Ok(text)
}

/// Interpret raw stdin bytes as spoken text
///
/// Hook payloads are JSON objects with an optional `message` field. Anything
/// that fails to parse as such is spoken verbatim; empty input falls back to
/// the default phrase.
fn text_from_stdin(data: &str) -> String {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return DEFAULT_PHRASE.to_string();
    }

    match serde_json::from_str::<HookEvent>(trimmed) {
        Ok(event) => event
            .message
            .unwrap_or_else(|| DEFAULT_PHRASE.to_string()),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins_over_stdin() {
        let text = resolve_text(Some("Build finished"), "ignored").unwrap();
        assert_eq!(text, "Build finished");
    }

    #[test]
    fn test_json_message_field() {
        let text = resolve_text(None, r#"{"message": "Build finished"}"#).unwrap();
        assert_eq!(text, "Build finished");
    }

    #[test]
    fn test_json_without_message_uses_default() {
        let text = resolve_text(None, r#"{"event": "stop"}"#).unwrap();
        assert_eq!(text, DEFAULT_PHRASE);
    }

    #[test]
    fn test_plain_text_used_verbatim() {
        let text = resolve_text(None, "hello world\n").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_empty_stdin_uses_default() {
        let text = resolve_text(None, "").unwrap();
        assert_eq!(text, DEFAULT_PHRASE);

        let text = resolve_text(None, "  \n").unwrap();
        assert_eq!(text, DEFAULT_PHRASE);
    }

    #[test]
    fn test_blank_argument_is_an_error() {
        let err = resolve_text(Some("   "), "").unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
