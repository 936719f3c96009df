//! Named device registry with user overlay.

use indexmap::IndexMap;

use crate::device::{DeviceDescriptor, Engine, Viewport};

const CHROME_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.9 Safari/537.36";
const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.9 Safari/537.36 Edg/119.0.2151.44";
const FIREFOX_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:119.0) Gecko/20100101 Firefox/119.0";
const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
const PIXEL_5_UA: &str = "Mozilla/5.0 (Linux; Android 11; Pixel 5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.9 Mobile Safari/537.36";
const PIXEL_7_UA: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.9 Mobile Safari/537.36";
const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const GALAXY_S5_UA: &str = "Mozilla/5.0 (Linux; Android 5.0; SM-G900P Build/LRX21T) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.9 Mobile Safari/537.36";

/// Mapping from device name to emulation profile.
///
/// Built once at startup: the built-in preset table, overlaid with any
/// user-authored entries (last writer wins on a name collision). No mutation
/// happens after construction. Iteration follows insertion order, so device
/// listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: IndexMap<String, DeviceDescriptor>,
}

impl DeviceRegistry {
    /// A registry with no entries. Useful for tests and embedders that
    /// supply their own full device table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in preset table of common desktop and mobile profiles.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert(
            "Desktop Chrome",
            DeviceDescriptor::desktop(Viewport::new(1280, 720), CHROME_UA, Engine::Chromium),
        );
        registry.insert(
            "Desktop Edge",
            DeviceDescriptor::desktop(Viewport::new(1280, 720), EDGE_UA, Engine::Chromium),
        );
        registry.insert(
            "Desktop Firefox",
            DeviceDescriptor::desktop(Viewport::new(1280, 720), FIREFOX_UA, Engine::Firefox),
        );
        registry.insert(
            "Desktop Safari",
            DeviceDescriptor::desktop(Viewport::new(1280, 720), SAFARI_UA, Engine::Webkit),
        );
        registry.insert(
            "Pixel 5",
            DeviceDescriptor::mobile(Viewport::new(393, 851), PIXEL_5_UA, 2.75, Engine::Chromium),
        );
        registry.insert(
            "Pixel 7",
            DeviceDescriptor::mobile(Viewport::new(412, 915), PIXEL_7_UA, 2.625, Engine::Chromium),
        );
        registry.insert(
            "iPhone 12",
            DeviceDescriptor::mobile(Viewport::new(390, 664), IPHONE_UA, 3.0, Engine::Webkit),
        );
        registry.insert(
            "iPhone 14",
            DeviceDescriptor::mobile(Viewport::new(390, 664), IPHONE_UA, 3.0, Engine::Webkit),
        );
        registry.insert(
            "iPad (gen 7)",
            DeviceDescriptor::mobile(Viewport::new(810, 1080), IPAD_UA, 2.0, Engine::Webkit),
        );
        registry.insert(
            "Galaxy S5",
            DeviceDescriptor::mobile(Viewport::new(360, 640), GALAXY_S5_UA, 3.0, Engine::Chromium),
        );
        registry
    }

    /// Insert one entry. An existing entry with the same name is replaced,
    /// keeping its position in the listing order.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: DeviceDescriptor) {
        self.devices.insert(name.into(), descriptor);
    }

    /// Overlay user-authored entries onto this registry, consuming it.
    /// Later entries win on a name collision.
    #[must_use]
    pub fn extend<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, DeviceDescriptor)>,
        K: Into<String>,
    {
        for (name, descriptor) in entries {
            self.insert(name, descriptor);
        }
        self
    }

    /// Look up a device by name. Unknown names are the caller's error to
    /// surface; see the project composer.
    pub fn resolve(&self, name: &str) -> Option<&DeviceDescriptor> {
        self.devices.get(name)
    }

    /// All registered names, in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(width: u32) -> DeviceDescriptor {
        DeviceDescriptor::desktop(Viewport::new(width, 600), "custom agent", Engine::Chromium)
    }

    #[test]
    fn builtin_contains_common_presets() {
        let registry = DeviceRegistry::builtin();
        assert!(registry.resolve("Desktop Chrome").is_some());
        assert!(registry.resolve("Desktop Firefox").is_some());
        assert!(registry.resolve("iPhone 12").is_some());
        assert!(registry.resolve("Galaxy S5").is_some());
        assert!(registry.resolve("Nokia 3310").is_none());
    }

    #[test]
    fn overlay_prefers_user_entry_on_collision() {
        let registry =
            DeviceRegistry::builtin().extend([("Desktop Chrome".to_string(), custom(800))]);
        let resolved = registry.resolve("Desktop Chrome").unwrap();
        assert_eq!(resolved.viewport, Viewport::new(800, 600));
        assert_eq!(resolved.user_agent, "custom agent");
    }

    #[test]
    fn overlay_is_idempotent() {
        let once = DeviceRegistry::builtin().extend([("Kiosk".to_string(), custom(1920))]);
        let twice = once.clone().extend([("Kiosk".to_string(), custom(1920))]);
        assert_eq!(once.len(), twice.len());
        assert_eq!(once.resolve("Kiosk"), twice.resolve("Kiosk"));
    }

    #[test]
    fn names_keep_insertion_order() {
        let registry = DeviceRegistry::builtin();
        let names: Vec<String> = registry.names().map(str::to_string).collect();
        assert_eq!(names[0], "Desktop Chrome");
        // Overriding a built-in keeps its original listing position.
        let registry = registry.extend([("Desktop Chrome".to_string(), custom(640))]);
        let names_after: Vec<String> = registry.names().map(str::to_string).collect();
        assert_eq!(names, names_after);
    }

    #[test]
    fn new_user_entries_append_at_the_end() {
        let registry = DeviceRegistry::builtin().extend([("Kiosk".to_string(), custom(1920))]);
        assert_eq!(registry.names().last().unwrap(), "Kiosk");
    }
}
