//! User confirmation as an explicit async request/response step.
//!
//! Destructive flows await a [`Confirmer`] before issuing any call. A
//! declined (or abandoned) request aborts the flow with no side effect.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// What the user is being asked to approve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    BatchDelete { count: usize },
    SwitchProject,
    DeleteAllProjects,
    DeleteAllTasks,
    DeleteTask,
    ForgetMemory,
    DeleteAllMemories,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub kind: ConfirmKind,
    pub message: String,
}

impl ConfirmRequest {
    pub fn new(kind: ConfirmKind) -> Self {
        let message = match kind {
            ConfirmKind::BatchDelete { count } => format!("Delete {count} items?"),
            ConfirmKind::SwitchProject => "Switch project? This pauses current tasks.".to_string(),
            ConfirmKind::DeleteAllProjects => {
                "DANGER: Delete ALL projects? This cannot be undone.".to_string()
            }
            ConfirmKind::DeleteAllTasks => "Delete ALL tasks?".to_string(),
            ConfirmKind::DeleteTask => "Delete this task?".to_string(),
            ConfirmKind::ForgetMemory => "Forget this memory?".to_string(),
            ConfirmKind::DeleteAllMemories => {
                "DANGER: Delete ALL memories? This cannot be undone.".to_string()
            }
        };
        Self { kind, message }
    }

    /// Requests that need the strong, clearly-marked confirmation
    pub fn is_destructive(&self) -> bool {
        matches!(
            self.kind,
            ConfirmKind::DeleteAllProjects | ConfirmKind::DeleteAllMemories
        )
    }
}

/// Suspend point awaiting the user's decision
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Answers every request the same way
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        tracing::debug!("auto-{}: {}", if self.0 { "confirmed" } else { "declined" }, request.message);
        self.0
    }
}

/// A confirmation waiting for the GUI to answer
#[derive(Debug)]
pub struct PendingConfirm {
    pub request: ConfirmRequest,
    reply: oneshot::Sender<bool>,
}

impl PendingConfirm {
    pub fn answer(self, approved: bool) {
        // Receiver gone means the flow was dropped; nothing to unblock
        let _ = self.reply.send(approved);
    }
}

/// Forwards requests to whoever drains the receiving end (the GUI)
#[derive(Debug, Clone)]
pub struct PromptConfirmer {
    tx: mpsc::UnboundedSender<PendingConfirm>,
}

impl PromptConfirmer {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PendingConfirm>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Confirmer for PromptConfirmer {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let (reply, answer) = oneshot::channel();
        if self.tx.send(PendingConfirm { request, reply }).is_err() {
            return false;
        }
        // A dropped reply counts as "no"
        answer.await.unwrap_or(false)
    }
}

/// Asks `[y/N]` on the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

#[async_trait]
impl Confirmer for TerminalConfirmer {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let prompt = request.message;
        let answer = tokio::task::spawn_blocking(move || {
            use std::io::Write;

            print!("{prompt} [y/N] ");
            let _ = std::io::stdout().flush();
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}
