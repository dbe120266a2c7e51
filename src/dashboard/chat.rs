use super::Dashboard;
use crate::api::ApiError;
use crate::domain::{ChatLine, ChatRequest};

/// Transcript plus the enabled state of the input controls
#[derive(Debug, Clone)]
pub struct ChatState {
    pub transcript: Vec<ChatLine>,
    pub input_enabled: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            transcript: Vec::new(),
            input_enabled: true,
        }
    }
}

impl ChatState {
    pub fn is_waiting(&self) -> bool {
        self.transcript.iter().any(|line| line.placeholder)
    }

    fn drop_placeholder(&mut self) {
        self.transcript.retain(|line| !line.placeholder);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or a send already in flight; nothing happened
    Ignored,
    Replied,
    Failed(ApiError),
}

/// Text shown in the transcript when a send fails
pub fn failure_text(error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } => format!("Error: {}", error.detail().unwrap_or("Failed")),
        ApiError::Transport(msg) | ApiError::Decode(msg) => format!("Net Error: {msg}"),
    }
}

/// Re-enables the input on every exit path, including a dropped send future
struct InputGuard<'a> {
    dashboard: &'a Dashboard,
}

impl Drop for InputGuard<'_> {
    fn drop(&mut self) {
        self.dashboard.update(|state| {
            state.chat.drop_placeholder();
            state.chat.input_enabled = true;
        });
    }
}

pub struct ChatSession<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> ChatSession<'a> {
    pub(super) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    pub async fn send(&self, message: &str) -> SendOutcome {
        let message = message.trim();
        if message.is_empty() {
            return SendOutcome::Ignored;
        }

        let accepted = self.dashboard.update(|state| {
            if !state.chat.input_enabled {
                return false;
            }
            state.chat.transcript.push(ChatLine::user(message));
            state.chat.input_enabled = false;
            state.chat.transcript.push(ChatLine::pending());
            true
        });
        if !accepted {
            tracing::debug!("chat send ignored, reply still pending");
            return SendOutcome::Ignored;
        }

        let guard = InputGuard {
            dashboard: self.dashboard,
        };

        let request = ChatRequest {
            message: message.to_string(),
            session_id: self.dashboard.session_id().to_string(),
        };
        let result = self.dashboard.backend().send_chat(&request).await;

        let outcome = self.dashboard.update(|state| {
            state.chat.drop_placeholder();
            match result {
                Ok(reply) => {
                    state.chat.transcript.push(ChatLine::assistant(reply.response));
                    SendOutcome::Replied
                }
                Err(e) => {
                    tracing::warn!("chat failed: {}", e);
                    state.chat.transcript.push(ChatLine::failure(failure_text(&e)));
                    SendOutcome::Failed(e)
                }
            }
        });
        drop(guard);

        // The assistant may have created tasks or memories
        if outcome == SendOutcome::Replied {
            self.dashboard.refresh_all().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text() {
        let status = ApiError::from_status(400, r#"{"detail":"Message too long"}"#);
        assert_eq!(failure_text(&status), "Error: Message too long");

        let bare = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(failure_text(&bare), "Error: Failed");

        let net = ApiError::Transport("Connection refused".to_string());
        assert_eq!(failure_text(&net), "Net Error: Connection refused");
    }
}
