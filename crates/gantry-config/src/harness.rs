//! The aggregate configuration facade.
//!
//! [`HarnessConfig::load`] is the single composition point: it resolves the
//! environment snapshot, overlays the device registry, expands the project
//! matrix, and reads the optional web-server settings file. Every source
//! fully completes (value, explicit absence, or fatal error) before the
//! facade value exists, and nothing mutates it afterwards.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::device::DeviceDescriptor;
use crate::env::EnvSource;
use crate::error::Result;
use crate::project::{self, ProjectDescriptor, TargetMatrix};
use crate::registry::DeviceRegistry;
use crate::reporter::{self, Reporter};
use crate::settings::EnvironmentSettings;
use crate::webserver::{self, WebServerEntry};

/// Inputs to [`HarnessConfig::load`].
///
/// The defaults mirror the stock template: built-in registry, the default
/// desktop/mobile matrix, `web-server.json` in the working directory, and
/// per-category artifact folders under `test-results/`.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    /// `.env` file merged under the process environment; `None` uses the
    /// conventional lookup in the working directory and its ancestors.
    pub dotenv_path: Option<PathBuf>,
    /// Location of the optional web-server settings file.
    pub web_server_path: PathBuf,
    /// User-authored registry entries, overlaid onto the built-in table.
    pub extra_devices: Vec<(String, DeviceDescriptor)>,
    /// Desktop and mobile target lists to expand.
    pub targets: TargetMatrix,
    /// Artifact folder for desktop projects.
    pub desktop_output_dir: PathBuf,
    /// Artifact folder for mobile projects.
    pub mobile_output_dir: PathBuf,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            dotenv_path: None,
            web_server_path: PathBuf::from("web-server.json"),
            extra_devices: Vec::new(),
            targets: TargetMatrix::default(),
            desktop_output_dir: PathBuf::from("test-results/desktop"),
            mobile_output_dir: PathBuf::from("test-results/mobile"),
        }
    }
}

impl HarnessOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit `.env` file instead of the conventional lookup.
    #[must_use]
    pub fn with_dotenv(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Read web-server settings from `path`.
    #[must_use]
    pub fn with_web_server_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.web_server_path = path.into();
        self
    }

    /// Register a user device; overrides a built-in with the same name.
    #[must_use]
    pub fn with_device(mut self, name: impl Into<String>, descriptor: DeviceDescriptor) -> Self {
        self.extra_devices.push((name.into(), descriptor));
        self
    }

    /// Replace the default target matrix.
    #[must_use]
    pub fn with_targets(mut self, targets: TargetMatrix) -> Self {
        self.targets = targets;
        self
    }

    /// Replace the per-category artifact folders.
    #[must_use]
    pub fn with_output_dirs(
        mut self,
        desktop: impl Into<PathBuf>,
        mobile: impl Into<PathBuf>,
    ) -> Self {
        self.desktop_output_dir = desktop.into();
        self.mobile_output_dir = mobile.into();
        self
    }

    /// Default options with the settings file and artifact folders kept
    /// together under `root`, for callers running outside the working
    /// directory.
    #[must_use]
    pub fn rooted_at(root: &Path) -> Self {
        Self::default()
            .with_web_server_path(root.join("web-server.json"))
            .with_output_dirs(
                root.join("test-results/desktop"),
                root.join("test-results/mobile"),
            )
    }
}

/// The full configuration surface handed to the external test runner.
///
/// Constructed exactly once per process by [`HarnessConfig::load`] and
/// consumed read-only; there is no ambient singleton to reach for.
#[derive(Debug, Clone, Serialize)]
pub struct HarnessConfig {
    pub environment: EnvironmentSettings,
    pub reporters: Vec<Reporter>,
    pub projects: Vec<ProjectDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_servers: Option<Vec<WebServerEntry>>,
}

impl HarnessConfig {
    /// Resolve every configuration source and assemble the facade.
    ///
    /// Performs the one-shot `.env` merge first, then delegates to
    /// [`HarnessConfig::from_sources`]. A failure in any source aborts the
    /// whole load; no partially constructed facade escapes.
    pub fn load(options: HarnessOptions) -> Result<Self> {
        let env = EnvSource::init(options.dotenv_path.as_deref());
        Self::from_sources(&env, &options)
    }

    /// Assemble the facade from an explicit environment snapshot.
    ///
    /// Split out of [`HarnessConfig::load`] so tests and embedders can
    /// resolve against an in-memory environment without touching process
    /// state.
    pub fn from_sources(env: &EnvSource, options: &HarnessOptions) -> Result<Self> {
        let environment = EnvironmentSettings::resolve(env)?;
        let registry = DeviceRegistry::builtin().extend(options.extra_devices.iter().cloned());
        let projects = project::compose(
            &registry,
            &options.targets.desktop,
            &options.targets.mobile,
            &options.desktop_output_dir,
            &options.mobile_output_dir,
        )?;
        let web_servers = webserver::load(&options.web_server_path)?;
        let reporters = reporter::default_reporters(&environment);

        info!(
            projects = projects.len(),
            web_servers = web_servers.as_ref().map_or(0, Vec::len),
            "assembled harness configuration"
        );
        Ok(Self {
            environment,
            reporters,
            projects,
            web_servers,
        })
    }

    /// Look up a produced project by name.
    pub fn project(&self, name: &str) -> Option<&ProjectDescriptor> {
        self.projects.iter().find(|project| project.name == name)
    }
}
