//! Environment variable resolution.
//!
//! [`EnvSource`] snapshots the key/value environment exactly once, after a
//! `.env`-style file has been merged underneath it (variables already present
//! in the process environment win). All lookups read the frozen snapshot, so
//! resolution is deterministic and tests can build sources from plain pairs
//! without touching process-global state.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// A frozen snapshot of the environment used for settings resolution.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Merge a `.env` file into the process environment, then snapshot it.
    ///
    /// With `dotenv_path = None` the conventional `.env` file is searched for
    /// in the working directory and its ancestors. A missing file is not an
    /// error; the snapshot then reflects the process environment alone.
    /// Existing process variables always take precedence over file entries.
    pub fn init(dotenv_path: Option<&Path>) -> Self {
        match dotenv_path {
            Some(path) => match dotenvy::from_path(path) {
                Ok(()) => debug!(path = %path.display(), "merged .env file"),
                Err(err) => debug!(path = %path.display(), %err, "no .env file merged"),
            },
            None => match dotenvy::dotenv() {
                Ok(path) => debug!(path = %path.display(), "merged .env file"),
                Err(_) => debug!("no .env file found"),
            },
        }
        Self::from_process()
    }

    /// Capture the current process environment without a `.env` merge.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a source from in-memory pairs. Intended for tests and embedders
    /// that resolve settings against something other than the real process
    /// environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a required value.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingConfiguration`] when the key is absent.
    pub fn require(&self, key: &str) -> Result<String> {
        self.vars
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingConfiguration {
                key: key.to_string(),
                reason: "variable is not set and no default applies".to_string(),
            })
    }

    /// Look up a value, falling back to `default` when the key is absent.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.vars
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Look up a boolean, falling back to `default` when the key is absent.
    ///
    /// Only case-insensitive `"true"` and `"false"` are accepted. Anything
    /// else is malformed configuration, not a value to coerce.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingConfiguration`] when the value parses as
    /// neither `"true"` nor `"false"`.
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        let Some(raw) = self.vars.get(key) else {
            return Ok(default);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConfigError::MissingConfiguration {
                key: key.to_string(),
                reason: format!("expected \"true\" or \"false\", got \"{raw}\""),
            }),
        }
    }
}
