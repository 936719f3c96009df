//! Reporter descriptors passed through to the external runner.
//!
//! The list is authored data, not derived configuration: the facade hands it
//! to the runner unchanged.

use std::path::PathBuf;

use serde::Serialize;

use crate::settings::EnvironmentSettings;

/// One reporter the runner should attach to the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reporter {
    /// Single-line progress output on the terminal.
    Line,
    /// Self-contained HTML report written to `output_folder`.
    Html { output_folder: PathBuf },
    /// Machine-readable run summary at `output_file`.
    Json { output_file: PathBuf },
}

/// The stock reporter list: line output for humans, one HTML report per
/// category, and a JSON summary for tooling.
pub fn default_reporters(settings: &EnvironmentSettings) -> Vec<Reporter> {
    vec![
        Reporter::Line,
        Reporter::Html {
            output_folder: settings.desktop_report_path.clone(),
        },
        Reporter::Html {
            output_folder: settings.mobile_report_path.clone(),
        },
        Reporter::Json {
            output_file: PathBuf::from("test-results/summary.json"),
        },
    ]
}
