//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use echodeck::config::Config;

/// Write a default config to `path` (or the global location)
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(&path)?;
    info!("Wrote {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
