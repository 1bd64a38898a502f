//! Conversation and wire types shared by the TUI, the API helper, and the proxy.

use serde::{Deserialize, Serialize};

/// A single entry in the conversation history. Lives only in view state;
/// nothing persists or transmits it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// Request body sent to the proxy (and forwarded to the backend `/ask`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Answer payload returned by the backend. The backend may send additional
/// fields; only `answer` is used. A missing answer is substituted with a
/// fixed string at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl AskResponse {
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_serializes_to_question_field() {
        let json = serde_json::to_string(&AskRequest {
            question: "What is RAG?".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"question":"What is RAG?"}"#);
    }

    #[test]
    fn ask_response_ignores_extra_fields() {
        let resp: AskResponse =
            serde_json::from_str(r#"{"answer":"42","sources":["a.md"],"latency_ms":12}"#).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("42"));
    }

    #[test]
    fn ask_response_tolerates_missing_answer() {
        let resp: AskResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_none());
    }

    #[test]
    fn chat_role_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), r#""model""#);
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), r#""user""#);
    }
}
