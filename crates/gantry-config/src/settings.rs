//! Resolved scalar settings for a test run.

use std::path::PathBuf;

use serde::Serialize;

use crate::env::EnvSource;
use crate::error::Result;

/// Environment variable names consumed by [`EnvironmentSettings::resolve`].
pub mod keys {
    pub const BASE_URL: &str = "BASE_URL";
    pub const DESKTOP_REPORT_PATH: &str = "DESKTOP_REPORT_PATH";
    pub const MOBILE_REPORT_PATH: &str = "MOBILE_REPORT_PATH";
    pub const RUN_PARALLEL: &str = "RUN_PARALLEL";
}

/// Scalar settings resolved once at startup and frozen afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSettings {
    /// Base URL every test navigates against. Required.
    pub base_url: String,

    /// Output folder for the desktop HTML report.
    pub desktop_report_path: PathBuf,

    /// Output folder for the mobile HTML report.
    pub mobile_report_path: PathBuf,

    /// Whether the runner may execute test files in parallel.
    pub run_parallel: bool,
}

impl EnvironmentSettings {
    /// Resolve all settings from an environment snapshot.
    ///
    /// Fails fast when `BASE_URL` is absent or `RUN_PARALLEL` is malformed;
    /// a partially resolved value never escapes.
    pub fn resolve(env: &EnvSource) -> Result<Self> {
        Ok(Self {
            base_url: env.require(keys::BASE_URL)?,
            desktop_report_path: env
                .string_or(keys::DESKTOP_REPORT_PATH, default_desktop_report_path())
                .into(),
            mobile_report_path: env
                .string_or(keys::MOBILE_REPORT_PATH, default_mobile_report_path())
                .into(),
            run_parallel: env.bool_or(keys::RUN_PARALLEL, false)?,
        })
    }
}

fn default_desktop_report_path() -> &'static str {
    "html-report/desktop"
}

fn default_mobile_report_path() -> &'static str {
    "html-report/mobile"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn resolve_reads_all_keys() {
        let env = EnvSource::from_pairs([
            (keys::BASE_URL, "https://staging.example.dev"),
            (keys::DESKTOP_REPORT_PATH, "reports/d"),
            (keys::MOBILE_REPORT_PATH, "reports/m"),
            (keys::RUN_PARALLEL, "true"),
        ]);
        let settings = EnvironmentSettings::resolve(&env).unwrap();
        assert_eq!(settings.base_url, "https://staging.example.dev");
        assert_eq!(settings.desktop_report_path, PathBuf::from("reports/d"));
        assert_eq!(settings.mobile_report_path, PathBuf::from("reports/m"));
        assert!(settings.run_parallel);
    }

    #[test]
    fn resolve_applies_defaults() {
        let env = EnvSource::from_pairs([(keys::BASE_URL, "http://localhost:3000")]);
        let settings = EnvironmentSettings::resolve(&env).unwrap();
        assert_eq!(
            settings.desktop_report_path,
            PathBuf::from("html-report/desktop")
        );
        assert_eq!(
            settings.mobile_report_path,
            PathBuf::from("html-report/mobile")
        );
        assert!(!settings.run_parallel);
    }

    #[test]
    fn resolve_fails_without_base_url() {
        let env = EnvSource::from_pairs([(keys::RUN_PARALLEL, "false")]);
        let err = EnvironmentSettings::resolve(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingConfiguration { ref key, .. } if key == keys::BASE_URL
        ));
    }

    #[test]
    fn resolve_fails_on_malformed_parallel_flag() {
        let env = EnvSource::from_pairs([
            (keys::BASE_URL, "http://localhost:3000"),
            (keys::RUN_PARALLEL, "1"),
        ]);
        let err = EnvironmentSettings::resolve(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingConfiguration { ref key, .. } if key == keys::RUN_PARALLEL
        ));
    }
}
