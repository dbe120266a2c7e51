//! Chat command implementation

use anyhow::{Result, bail};

use echodeck::dashboard::{Dashboard, SendOutcome};
use echodeck::domain::ChatRole;

pub async fn chat_command(dashboard: &Dashboard, message: &str) -> Result<()> {
    let outcome = dashboard.chat().send(message).await;

    let transcript = dashboard.read(|state| state.chat.transcript.clone());
    for line in &transcript {
        let who = match line.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "echo",
        };
        println!("[{}] {}: {}", line.at.format("%H:%M:%S"), who, line.text);
    }

    match outcome {
        SendOutcome::Replied => Ok(()),
        SendOutcome::Ignored => bail!("Nothing to send"),
        SendOutcome::Failed(e) => bail!("Chat failed: {e}"),
    }
}
