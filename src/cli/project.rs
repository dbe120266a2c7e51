//! Project command implementation

use anyhow::Result;
use clap::Subcommand;

use echodeck::dashboard::Dashboard;
use echodeck::domain::EntityId;

use super::report;

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Make a project the active one
    Switch { id: String },

    /// Create a project
    Create {
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Delete every project
    DeleteAll,
}

pub async fn project_command(dashboard: &Dashboard, command: ProjectCommand) -> Result<()> {
    let projects = dashboard.projects();
    match command {
        ProjectCommand::Switch { id } => {
            report("switch", projects.switch_active(&EntityId::new(id)).await)
        }
        ProjectCommand::Create { name } => {
            report("create", projects.create(&name.join(" ")).await)
        }
        ProjectCommand::DeleteAll => report("delete all projects", projects.delete_all().await),
    }
}
