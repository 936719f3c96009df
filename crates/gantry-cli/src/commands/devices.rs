//! `gantry devices` - dump registered device names.

use std::fs;

use anyhow::{Context, Result};
use gantry_config::DeviceRegistry;
use tracing::info;

use crate::cli::DevicesArgs;

/// Render the registry's device names, one per line, in listing order.
pub fn render_device_list(registry: &DeviceRegistry) -> String {
    let mut out = String::new();
    for name in registry.names() {
        out.push_str(name);
        out.push('\n');
    }
    out
}

pub fn devices_execute(args: &DevicesArgs) -> Result<()> {
    let registry = DeviceRegistry::builtin();
    let listing = render_device_list(&registry);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &listing).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), devices = registry.len(), "wrote device list");
        }
        None => print!("{listing}"),
    }
    Ok(())
}
