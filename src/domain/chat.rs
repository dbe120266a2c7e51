use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Successful reply from `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the chat transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub role: ChatRole,
    pub text: String,
    pub at: DateTime<Local>,
    /// Set on the transient "..." row shown while a reply is pending
    pub placeholder: bool,
    /// Set on inline error lines
    pub error: bool,
}

impl ChatLine {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    pub fn pending() -> Self {
        Self {
            placeholder: true,
            ..Self::new(ChatRole::Assistant, "...")
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            error: true,
            ..Self::new(ChatRole::Assistant, text)
        }
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            at: Local::now(),
            placeholder: false,
            error: false,
        }
    }
}
