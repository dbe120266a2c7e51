//! Snapshot command implementation

use anyhow::{Result, bail};

use echodeck::dashboard::Dashboard;

/// One full refresh, printed as text
pub async fn snapshot_command(dashboard: &Dashboard) -> Result<()> {
    let outcome = dashboard.refresh_all().await;

    let failures: Vec<String> = outcome
        .failures()
        .map(|(kind, e)| format!("{}: {}", kind.collection(), e))
        .collect();
    if failures.len() == 3 {
        bail!("Backend unreachable ({})", failures.join("; "));
    }

    let text = dashboard.read(|state| {
        [
            state.projects.view().to_text("Projects"),
            state.tasks.view().to_text("Tasks"),
            state.memories.view().to_text("Memories"),
        ]
        .join("\n")
    });
    print!("{text}");

    for failure in failures {
        eprintln!("warning: {failure}");
    }
    Ok(())
}
