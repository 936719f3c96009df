//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gantry_config::HarnessOptions;

#[derive(Debug, Parser)]
#[command(
    name = "gantry",
    version,
    about = "Assemble and inspect end-to-end browser test configuration"
)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered device names, one per line
    Devices(DevicesArgs),
    /// Resolve the full configuration and print it as JSON
    Show(ShowArgs),
    /// Resolve the full configuration; non-zero exit on any error
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct DevicesArgs {
    /// Write the list to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

/// Flags shared by every command that loads the full configuration.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Explicit .env file merged under the process environment
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Web-server settings JSON file
    #[arg(long = "web-server", value_name = "PATH", default_value = "web-server.json")]
    pub web_server: PathBuf,
}

impl LoadArgs {
    /// Turn the flags into load options, keeping every other default.
    pub fn to_options(&self) -> HarnessOptions {
        let mut options = HarnessOptions::new().with_web_server_path(&self.web_server);
        if let Some(env_file) = &self.env_file {
            options = options.with_dotenv(env_file);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn devices_accepts_an_output_path() {
        let cli = Cli::parse_from(["gantry", "devices", "--out", "docs/devices.txt"]);
        let Command::Devices(args) = cli.command else {
            panic!("expected the devices command");
        };
        assert_eq!(args.out.as_deref(), Some(std::path::Path::new("docs/devices.txt")));
    }

    #[test]
    fn show_wires_the_load_flags() {
        let cli = Cli::parse_from([
            "gantry",
            "show",
            "--env-file",
            ".env.ci",
            "--web-server",
            "conf/web-server.json",
        ]);
        let Command::Show(args) = cli.command else {
            panic!("expected the show command");
        };
        let options = args.load.to_options();
        assert_eq!(
            options.dotenv_path.as_deref(),
            Some(std::path::Path::new(".env.ci"))
        );
        assert_eq!(
            options.web_server_path,
            std::path::PathBuf::from("conf/web-server.json")
        );
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["gantry", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }
}
