//! Logging infrastructure for the gantry CLI.
//!
//! Structured logging via the `tracing` ecosystem: `--verbose` for debug,
//! `--quiet` for errors only, `RUST_LOG` for custom filters in between.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging occurs.
///
/// The filter is chosen in this order: `--verbose` (debug for gantry
/// crates), `--quiet` (errors only), the `RUST_LOG` environment variable,
/// then the info-level default.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("gantry=debug,gantry_config=debug,gantry_cli=debug")
    } else if quiet {
        EnvFilter::new("gantry=error,gantry_config=error,gantry_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gantry=info,gantry_config=info,gantry_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
