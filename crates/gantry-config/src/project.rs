//! Project expansion: device/channel target lists into named execution
//! targets.
//!
//! This is the one derivation step of the crate. Each category (desktop,
//! mobile) contributes an aggregate project that bundles every resolved
//! device in the category, followed by one individually named project per
//! target. The produced sequence is deterministic for identical inputs and
//! every name in it is unique; composition fails rather than emit a sequence
//! the runner could not address unambiguously.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::device::DeviceDescriptor;
use crate::error::{ConfigError, Result};
use crate::registry::DeviceRegistry;

/// Prefix dropped from desktop device names when deriving project names.
const DESKTOP_NAME_PREFIX: &str = "Desktop ";

/// Name of the desktop aggregate project.
pub const DESKTOP_SUITE_NAME: &str = "Desktop";

/// Name of the mobile aggregate project.
pub const MOBILE_SUITE_NAME: &str = "Mobile";

/// One requested execution target before registry resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceTarget {
    /// Device name to look up in the registry.
    pub device: String,
    /// Release-channel override for the engine build; `None` means the
    /// engine's default build.
    pub channel: Option<String>,
}

impl DeviceTarget {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            channel: None,
        }
    }

    pub fn with_channel(device: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            channel: Some(channel.into()),
        }
    }
}

/// The desktop and mobile target lists a run expands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetMatrix {
    pub desktop: Vec<DeviceTarget>,
    pub mobile: Vec<DeviceTarget>,
}

impl Default for TargetMatrix {
    /// The stock matrix: every built-in desktop browser (branded channels
    /// for Chrome and Edge) plus a representative mobile spread.
    fn default() -> Self {
        Self {
            desktop: vec![
                DeviceTarget::with_channel("Desktop Chrome", "chrome"),
                DeviceTarget::with_channel("Desktop Edge", "msedge"),
                DeviceTarget::new("Desktop Firefox"),
                DeviceTarget::new("Desktop Safari"),
            ],
            mobile: vec![
                DeviceTarget::new("Pixel 5"),
                DeviceTarget::new("iPhone 12"),
                DeviceTarget::new("Galaxy S5"),
            ],
        }
    }
}

/// A resolved emulation profile plus the optional release-channel override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmulatedDevice {
    #[serde(flatten)]
    pub descriptor: DeviceDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// Device payload of a project: one emulated device, or a whole category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectDevices {
    Single(EmulatedDevice),
    Suite(Vec<DeviceDescriptor>),
}

/// A named, independently executable configuration bundle for the external
/// test runner. Read-only once composed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub devices: ProjectDevices,
    pub output_dir: PathBuf,
}

/// Expand the desktop and mobile target lists into the ordered project
/// sequence.
///
/// The sequence is: the `"Desktop"` aggregate, the `"Mobile"` aggregate,
/// one project per desktop target (named by dropping a leading
/// `"Desktop "` from the device name when present), then one per mobile
/// target (named exactly like the device). Aggregates bundle the full
/// ordered descriptor list of their category and are emitted even for an
/// empty category.
///
/// # Errors
///
/// - [`ConfigError::UnknownDevice`] when a target names a device the
///   registry does not contain.
/// - [`ConfigError::DuplicateProjectName`] when two produced projects would
///   share a name, or when both categories reference the same device.
pub fn compose(
    registry: &DeviceRegistry,
    desktop_targets: &[DeviceTarget],
    mobile_targets: &[DeviceTarget],
    desktop_output_dir: &Path,
    mobile_output_dir: &Path,
) -> Result<Vec<ProjectDescriptor>> {
    let desktop_devices = resolve_all(registry, desktop_targets)?;
    let mobile_devices = resolve_all(registry, mobile_targets)?;

    // A device referenced by both categories is the same double-booking
    // mistake as a literal name collision, even where prefix stripping
    // would keep the derived project names distinct.
    let mut referenced: HashSet<&str> = HashSet::new();
    for target in desktop_targets.iter().chain(mobile_targets) {
        if !referenced.insert(&target.device) {
            return Err(ConfigError::DuplicateProjectName {
                name: target.device.clone(),
            });
        }
    }

    let mut names: HashSet<String> = HashSet::new();
    let mut projects = Vec::with_capacity(desktop_targets.len() + mobile_targets.len() + 2);

    push_unique(
        &mut projects,
        &mut names,
        ProjectDescriptor {
            name: DESKTOP_SUITE_NAME.to_string(),
            devices: ProjectDevices::Suite(
                desktop_devices.iter().map(|d| d.descriptor.clone()).collect(),
            ),
            output_dir: desktop_output_dir.to_path_buf(),
        },
    )?;
    push_unique(
        &mut projects,
        &mut names,
        ProjectDescriptor {
            name: MOBILE_SUITE_NAME.to_string(),
            devices: ProjectDevices::Suite(
                mobile_devices.iter().map(|d| d.descriptor.clone()).collect(),
            ),
            output_dir: mobile_output_dir.to_path_buf(),
        },
    )?;

    for (target, device) in desktop_targets.iter().zip(desktop_devices) {
        push_unique(
            &mut projects,
            &mut names,
            ProjectDescriptor {
                name: desktop_project_name(&target.device).to_string(),
                devices: ProjectDevices::Single(device),
                output_dir: desktop_output_dir.to_path_buf(),
            },
        )?;
    }
    for (target, device) in mobile_targets.iter().zip(mobile_devices) {
        push_unique(
            &mut projects,
            &mut names,
            ProjectDescriptor {
                name: target.device.clone(),
                devices: ProjectDevices::Single(device),
                output_dir: mobile_output_dir.to_path_buf(),
            },
        )?;
    }

    Ok(projects)
}

fn resolve_all(registry: &DeviceRegistry, targets: &[DeviceTarget]) -> Result<Vec<EmulatedDevice>> {
    targets
        .iter()
        .map(|target| {
            let descriptor = registry
                .resolve(&target.device)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownDevice {
                    name: target.device.clone(),
                })?;
            Ok(EmulatedDevice {
                descriptor,
                channel: target.channel.clone(),
            })
        })
        .collect()
}

fn desktop_project_name(device: &str) -> &str {
    device.strip_prefix(DESKTOP_NAME_PREFIX).unwrap_or(device)
}

fn push_unique(
    projects: &mut Vec<ProjectDescriptor>,
    names: &mut HashSet<String>,
    project: ProjectDescriptor,
) -> Result<()> {
    if !names.insert(project.name.clone()) {
        return Err(ConfigError::DuplicateProjectName { name: project.name });
    }
    projects.push(project);
    Ok(())
}
