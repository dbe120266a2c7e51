//! CLI command implementations

pub mod chat;
pub mod delete;
pub mod init;
pub mod memory;
pub mod project;
pub mod snapshot;
pub mod task;

use std::sync::Arc;

use anyhow::{Result, bail};

use echodeck::api::HttpBackend;
use echodeck::config::Config;
use echodeck::confirm::{AutoConfirm, Confirmer, TerminalConfirmer};
use echodeck::dashboard::{ActionOutcome, Dashboard};
use echodeck::session::SessionId;

/// Build a dashboard against the configured backend
pub fn connect(config: &Config, assume_yes: bool) -> Dashboard {
    let backend = Arc::new(HttpBackend::new(&config.server));
    tracing::debug!("backend at {}", backend.base_url());

    let confirmer: Arc<dyn Confirmer> = if assume_yes {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(TerminalConfirmer)
    };
    let session = SessionId::load_or_create(&SessionId::default_path());

    Dashboard::new(backend, confirmer, session)
}

/// Print the result of a single mutation; failures become the exit error
pub fn report(what: &str, outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Completed => {
            println!("{what}: done");
            Ok(())
        }
        ActionOutcome::Declined => {
            println!("{what}: cancelled");
            Ok(())
        }
        ActionOutcome::Skipped => {
            println!("{what}: nothing to do");
            Ok(())
        }
        ActionOutcome::Failed(e) => bail!("{what} failed: {e}"),
    }
}
