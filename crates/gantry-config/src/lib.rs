//! # gantry-config
//!
//! Configuration assembly for end-to-end browser test runs.
//!
//! This crate builds the full configuration surface an external test runner
//! consumes before executing anything: environment-driven settings (with a
//! one-shot `.env` merge), an optional JSON web-server bootstrap file, a
//! device-emulation registry, and the deterministic expansion of device and
//! channel target lists into uniquely named projects.
//!
//! ## Architecture
//!
//! - **EnvSource**: frozen snapshot of the environment, strict value parsing
//! - **EnvironmentSettings**: required/defaulted scalar settings for a run
//! - **DeviceRegistry**: built-in emulation presets plus user overlay
//! - **compose**: device/channel targets into named project descriptors
//! - **HarnessConfig**: the one-shot facade bundling all of the above
//!
//! Construction is synchronous and happens once at startup; every value is
//! frozen afterwards. All failures are fatal and carry the offending key,
//! path, or name - startup configuration is not a path worth retrying.
//!
//! ## Example
//!
//! ```no_run
//! use gantry_config::{HarnessConfig, HarnessOptions};
//!
//! fn main() -> gantry_config::Result<()> {
//!     let config = HarnessConfig::load(HarnessOptions::default())?;
//!     for project in &config.projects {
//!         println!("{} -> {}", project.name, project.output_dir.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod env;
pub mod error;
pub mod harness;
pub mod project;
pub mod registry;
pub mod reporter;
pub mod settings;
pub mod webserver;

// Re-export main types for convenience
pub use device::{DeviceDescriptor, Engine, Viewport};
pub use env::EnvSource;
pub use error::{ConfigError, Result};
pub use harness::{HarnessConfig, HarnessOptions};
pub use project::{
    compose, DeviceTarget, EmulatedDevice, ProjectDescriptor, ProjectDevices, TargetMatrix,
};
pub use registry::DeviceRegistry;
pub use reporter::{default_reporters, Reporter};
pub use settings::EnvironmentSettings;
pub use webserver::{StdioMode, WebServerEntry};
