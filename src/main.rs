use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use echodeck::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "echodeck")]
#[command(about = "Echo Deck - dashboard for the Echo assistant: chat, tasks, projects, memories")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.echodeck/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard window
    Gui,

    /// Fetch everything once and print the three lists
    Snapshot,

    /// Send one chat message and print the reply
    Chat {
        /// Message text
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Delete a mixed selection, one call per kind
    Delete {
        #[arg(long = "project", value_name = "ID")]
        projects: Vec<String>,

        #[arg(long = "task", value_name = "ID")]
        tasks: Vec<String>,

        #[arg(long = "memory", value_name = "ID")]
        memories: Vec<String>,
    },

    /// Task lifecycle
    #[command(subcommand)]
    Task(cli::task::TaskCommand),

    /// Project management
    #[command(subcommand)]
    Project(cli::project::ProjectCommand),

    /// Memory management
    #[command(subcommand)]
    Memory(cli::memory::MemoryCommand),

    /// Print the persisted chat session id
    Session,

    /// Write the default ~/.echodeck/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    let assume_yes = cli.yes;
    let command = cli.command.unwrap_or(Commands::Gui);
    if let Commands::Gui = command {
        // eframe owns the main thread; the runtime lives on a worker thread
        return echodeck::gui::run_gui(config);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let dashboard = cli::connect(&config, assume_yes);
        match command {
            Commands::Snapshot => cli::snapshot::snapshot_command(&dashboard).await,
            Commands::Chat { message } => {
                cli::chat::chat_command(&dashboard, &message.join(" ")).await
            }
            Commands::Delete {
                projects,
                tasks,
                memories,
            } => cli::delete::delete_command(&dashboard, projects, tasks, memories).await,
            Commands::Task(command) => cli::task::task_command(&dashboard, command).await,
            Commands::Project(command) => {
                cli::project::project_command(&dashboard, command).await
            }
            Commands::Memory(command) => cli::memory::memory_command(&dashboard, command).await,
            Commands::Session => {
                println!("{}", dashboard.session_id());
                Ok(())
            }
            Commands::Gui | Commands::Init { .. } => Ok(()),
        }
    })
}
