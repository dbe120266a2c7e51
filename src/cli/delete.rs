//! Batch delete command implementation

use anyhow::{Result, bail};

use echodeck::dashboard::{BatchOutcome, Dashboard};
use echodeck::domain::{EntityId, ResourceKind};

pub async fn delete_command(
    dashboard: &Dashboard,
    projects: Vec<String>,
    tasks: Vec<String>,
    memories: Vec<String>,
) -> Result<()> {
    let selection = [
        (ResourceKind::Project, projects),
        (ResourceKind::Task, tasks),
        (ResourceKind::Memory, memories),
    ];
    for (kind, ids) in selection {
        for id in ids.into_iter().map(EntityId::new) {
            // A repeated id would toggle back off
            if !dashboard.read(|s| s.selection.contains(kind, &id)) {
                dashboard.toggle(kind, id);
            }
        }
    }

    let selected: Vec<String> =
        dashboard.read(|s| s.selection.keys().map(ToString::to_string).collect());
    for key in &selected {
        println!("  {key}");
    }

    match dashboard.batch_delete().execute().await {
        BatchOutcome::NothingSelected => {
            bail!("Nothing selected. Pass --project, --task or --memory.")
        }
        BatchOutcome::Declined => {
            println!("Cancelled");
            Ok(())
        }
        BatchOutcome::Finished { calls, failed } => {
            for notice in dashboard.take_notices() {
                eprintln!("{}", notice.message);
            }
            if failed.is_empty() {
                println!("Deleted ({calls} request(s))");
                Ok(())
            } else {
                let kinds: Vec<&str> = failed.iter().map(|(kind, _)| kind.collection()).collect();
                bail!("Batch delete failed for {}", kinds.join(", "))
            }
        }
    }
}
