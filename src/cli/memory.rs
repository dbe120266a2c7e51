//! Memory command implementation

use anyhow::Result;
use clap::Subcommand;

use echodeck::dashboard::Dashboard;
use echodeck::domain::EntityId;

use super::report;

#[derive(Subcommand)]
pub enum MemoryCommand {
    /// Forget one memory
    Forget { id: String },

    /// Delete every memory
    DeleteAll,
}

pub async fn memory_command(dashboard: &Dashboard, command: MemoryCommand) -> Result<()> {
    let memories = dashboard.memories();
    match command {
        MemoryCommand::Forget { id } => {
            report("forget", memories.delete_one(&EntityId::new(id)).await)
        }
        MemoryCommand::DeleteAll => report("delete all memories", memories.delete_all().await),
    }
}
