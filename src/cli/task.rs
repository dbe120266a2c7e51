//! Task command implementation

use anyhow::Result;
use clap::Subcommand;

use echodeck::dashboard::Dashboard;
use echodeck::domain::{EntityId, TaskAction};

use super::report;

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Pause an active task
    Pause { id: String },

    /// Resume a paused task
    Resume { id: String },

    /// Delete one task
    Delete { id: String },

    /// Delete every task
    DeleteAll,
}

pub async fn task_command(dashboard: &Dashboard, command: TaskCommand) -> Result<()> {
    let tasks = dashboard.tasks();
    match command {
        TaskCommand::Pause { id } => report(
            "pause",
            tasks.control(&EntityId::new(id), TaskAction::Pause).await,
        ),
        TaskCommand::Resume { id } => report(
            "resume",
            tasks.control(&EntityId::new(id), TaskAction::Resume).await,
        ),
        TaskCommand::Delete { id } => report("delete", tasks.delete_one(&EntityId::new(id)).await),
        TaskCommand::DeleteAll => report("delete all tasks", tasks.delete_all().await),
    }
}
