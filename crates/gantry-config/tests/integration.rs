//! End-to-end assembly tests against real files in a temporary directory.

use std::fs;

use gantry_config::settings::keys;
use gantry_config::{
    ConfigError, DeviceTarget, EnvSource, HarnessConfig, HarnessOptions, ProjectDevices,
    TargetMatrix,
};
use tempfile::TempDir;

fn base_env() -> EnvSource {
    EnvSource::from_pairs([
        (keys::BASE_URL, "http://localhost:3000"),
        (keys::RUN_PARALLEL, "true"),
    ])
}

#[test]
fn full_assembly_with_web_server_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("web-server.json"),
        r#"[{"command": "npm run dev", "port": 3000, "reuseExistingServer": true}]"#,
    )
    .unwrap();

    let options = HarnessOptions::rooted_at(dir.path()).with_targets(TargetMatrix {
        desktop: vec![DeviceTarget::with_channel("Desktop Chrome", "chrome")],
        mobile: vec![DeviceTarget::new("iPhone 12")],
    });
    let config = HarnessConfig::from_sources(&base_env(), &options).unwrap();

    let names: Vec<&str> = config.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Desktop", "Mobile", "Chrome", "iPhone 12"]);

    let chrome = config.project("Chrome").unwrap();
    let ProjectDevices::Single(device) = &chrome.devices else {
        panic!("individual project must carry a single device");
    };
    assert_eq!(device.channel.as_deref(), Some("chrome"));

    let servers = config.web_servers.as_ref().unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].command, "npm run dev");
    assert_eq!(servers[0].port, Some(3000));

    assert!(config.environment.run_parallel);
}

#[test]
fn missing_web_server_file_yields_absent_settings() {
    let dir = TempDir::new().unwrap();
    let options = HarnessOptions::rooted_at(dir.path());
    let config = HarnessConfig::from_sources(&base_env(), &options).unwrap();
    assert!(config.web_servers.is_none());
}

#[test]
fn malformed_web_server_file_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("web-server.json"), "not json").unwrap();
    let options = HarnessOptions::rooted_at(dir.path());
    let err = HarnessConfig::from_sources(&base_env(), &options).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFile { .. }));
}

#[test]
fn unknown_device_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    let options = HarnessOptions::rooted_at(dir.path()).with_targets(TargetMatrix {
        desktop: vec![DeviceTarget::new("Desktop Netscape")],
        mobile: vec![],
    });
    let err = HarnessConfig::from_sources(&base_env(), &options).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnknownDevice { ref name } if name == "Desktop Netscape"
    ));
}

#[test]
fn dotenv_file_merges_under_the_process_environment() {
    let dir = TempDir::new().unwrap();
    let dotenv = dir.path().join(".env");
    // A name nothing else sets, so the file entry must win.
    fs::write(&dotenv, "GANTRY_DOTENV_PROBE=loaded\n").unwrap();

    let env = EnvSource::init(Some(&dotenv));
    assert_eq!(env.string_or("GANTRY_DOTENV_PROBE", "missing"), "loaded");
}

#[test]
fn facade_serializes_to_the_documented_shape() {
    let dir = TempDir::new().unwrap();
    let options = HarnessOptions::rooted_at(dir.path()).with_targets(TargetMatrix {
        desktop: vec![DeviceTarget::new("Desktop Firefox")],
        mobile: vec![DeviceTarget::new("Galaxy S5")],
    });
    let config = HarnessConfig::from_sources(&base_env(), &options).unwrap();

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["environment"]["base_url"], "http://localhost:3000");
    assert_eq!(value["projects"][2]["name"], "Firefox");
    // Individual projects flatten the descriptor; suites are plain arrays.
    assert!(value["projects"][2]["devices"]["viewport"]["width"].is_number());
    assert!(value["projects"][0]["devices"].is_array());
    // Absent web servers stay off the wire entirely.
    assert!(value.get("web_servers").is_none());
}
