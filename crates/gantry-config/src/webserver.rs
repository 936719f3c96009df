//! Web-server bootstrap settings file.
//!
//! An optional JSON file describing the local server(s) the external runner
//! must start before executing tests. A missing or empty file is the valid
//! "no settings" outcome, not an error; a file that exists but cannot be
//! read or parsed is fatal. The document is parsed untyped first and then
//! shape-checked field by field, so a well-formed document with the wrong
//! structure fails loudly instead of producing a wrong typed record.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// How the runner wires a spawned server's output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StdioMode {
    Pipe,
    Ignore,
}

/// One server bootstrap descriptor. Only `command` is required; every other
/// field falls back to the runner's own defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebServerEntry {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(rename = "ignoreHTTPSErrors", skip_serializing_if = "Option::is_none")]
    pub ignore_https_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reuse_existing_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<StdioMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<StdioMode>,
    /// Startup timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Load server entries from `path`.
///
/// Returns `Ok(None)` when the file does not exist or is empty; both mean
/// "no web server to bootstrap". The read and the shape check fully complete
/// before this returns, so callers never observe a half-loaded value.
///
/// # Errors
///
/// - [`ConfigError::ConfigFile`] when the file exists but cannot be read,
///   or is not syntactically valid JSON.
/// - [`ConfigError::Schema`] when the JSON is well-formed but does not have
///   the documented shape.
pub fn load(path: &Path) -> Result<Option<Vec<WebServerEntry>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no web-server settings file");
            return Ok(None);
        }
        Err(err) => {
            return Err(ConfigError::ConfigFile {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    };
    if content.trim().is_empty() {
        debug!(path = %path.display(), "web-server settings file is empty");
        return Ok(None);
    }

    let document: Value =
        serde_json::from_str(&content).map_err(|err| ConfigError::ConfigFile {
            path: path.to_path_buf(),
            reason: format!("invalid JSON: {err}"),
        })?;

    let entries = document.as_array().ok_or_else(|| ConfigError::Schema {
        path: path.to_path_buf(),
        detail: "expected a top-level array of server entries".to_string(),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, value)| parse_entry(path, index, value))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn parse_entry(path: &Path, index: usize, value: &Value) -> Result<WebServerEntry> {
    let object = value.as_object().ok_or_else(|| schema_error(
        path,
        index,
        "entry must be an object",
    ))?;

    let command = match object.get("command") {
        Some(Value::String(command)) => command.clone(),
        Some(_) => return Err(schema_error(path, index, "'command' must be a string")),
        None => return Err(schema_error(path, index, "'command' is required")),
    };

    Ok(WebServerEntry {
        command,
        cwd: string_field(path, index, object, "cwd")?.map(PathBuf::from),
        env: env_field(path, index, object)?,
        ignore_https_errors: bool_field(path, index, object, "ignoreHTTPSErrors")?,
        port: port_field(path, index, object)?,
        reuse_existing_server: bool_field(path, index, object, "reuseExistingServer")?,
        stdout: stdio_field(path, index, object, "stdout")?,
        stderr: stdio_field(path, index, object, "stderr")?,
        timeout: u64_field(path, index, object, "timeout")?,
        url: string_field(path, index, object, "url")?,
    })
}

type JsonObject = serde_json::Map<String, Value>;

fn schema_error(path: &Path, index: usize, detail: &str) -> ConfigError {
    ConfigError::Schema {
        path: path.to_path_buf(),
        detail: format!("entry {index}: {detail}"),
    }
}

fn string_field(
    path: &Path,
    index: usize,
    object: &JsonObject,
    field: &str,
) -> Result<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(schema_error(path, index, &format!("'{field}' must be a string"))),
    }
}

fn bool_field(
    path: &Path,
    index: usize,
    object: &JsonObject,
    field: &str,
) -> Result<Option<bool>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(schema_error(path, index, &format!("'{field}' must be a boolean"))),
    }
}

fn u64_field(path: &Path, index: usize, object: &JsonObject, field: &str) -> Result<Option<u64>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(value)) => value.as_u64().map(Some).ok_or_else(|| {
            schema_error(path, index, &format!("'{field}' must be a non-negative integer"))
        }),
        Some(_) => Err(schema_error(path, index, &format!("'{field}' must be a number"))),
    }
}

fn port_field(path: &Path, index: usize, object: &JsonObject) -> Result<Option<u16>> {
    match u64_field(path, index, object, "port")? {
        None => Ok(None),
        Some(port) => u16::try_from(port).map(Some).map_err(|_| {
            schema_error(path, index, &format!("'port' {port} is outside the valid range"))
        }),
    }
}

fn stdio_field(
    path: &Path,
    index: usize,
    object: &JsonObject,
    field: &str,
) -> Result<Option<StdioMode>> {
    match string_field(path, index, object, field)? {
        None => Ok(None),
        Some(mode) => match mode.as_str() {
            "pipe" => Ok(Some(StdioMode::Pipe)),
            "ignore" => Ok(Some(StdioMode::Ignore)),
            other => Err(schema_error(
                path,
                index,
                &format!("'{field}' must be \"pipe\" or \"ignore\", got \"{other}\""),
            )),
        },
    }
}

fn env_field(
    path: &Path,
    index: usize,
    object: &JsonObject,
) -> Result<Option<BTreeMap<String, String>>> {
    let Some(value) = object.get("env") else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    let map = value
        .as_object()
        .ok_or_else(|| schema_error(path, index, "'env' must be an object"))?;
    let mut env = BTreeMap::new();
    for (key, entry) in map {
        let Value::String(entry) = entry else {
            return Err(schema_error(
                path,
                index,
                &format!("'env.{key}' must be a string"),
            ));
        };
        env.insert(key.clone(), entry.clone());
    }
    Ok(Some(env))
}
