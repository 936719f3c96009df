//! `gantry check` - validate the configuration for CI.

use anyhow::{Context, Result};
use gantry_config::HarnessConfig;

use crate::cli::CheckArgs;

pub fn check_execute(args: &CheckArgs) -> Result<()> {
    let config = HarnessConfig::load(args.load.to_options())
        .context("configuration check failed")?;
    println!(
        "configuration ok: {} projects, {} reporters, web servers: {}",
        config.projects.len(),
        config.reporters.len(),
        config
            .web_servers
            .as_ref()
            .map_or_else(|| "none".to_string(), |servers| servers.len().to_string())
    );
    Ok(())
}
