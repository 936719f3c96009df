//! `gantry show` - resolve the configuration and print it as JSON.

use anyhow::{Context, Result};
use gantry_config::HarnessConfig;

use crate::cli::ShowArgs;

pub fn show_execute(args: &ShowArgs) -> Result<()> {
    let config = HarnessConfig::load(args.load.to_options())
        .context("failed to assemble the harness configuration")?;
    let rendered =
        serde_json::to_string_pretty(&config).context("serializing the configuration")?;
    println!("{rendered}");
    Ok(())
}
