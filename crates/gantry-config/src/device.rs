//! Device emulation profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Browser engine a device is rendered with by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Chromium,
    Firefox,
    Webkit,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chromium => write!(f, "chromium"),
            Self::Firefox => write!(f, "firefox"),
            Self::Webkit => write!(f, "webkit"),
        }
    }
}

/// Page dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A fixed emulation profile: viewport, user agent, scale and input
/// capabilities, plus the engine that renders it by default.
///
/// Descriptors are built once at startup (from the built-in preset table or
/// user extension entries) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub viewport: Viewport,
    pub user_agent: String,
    /// Ratio of device pixels to CSS pixels. Always positive.
    pub device_scale_factor: f64,
    pub is_mobile: bool,
    pub has_touch: bool,
    pub default_engine: Engine,
}

impl DeviceDescriptor {
    /// Desktop profile: scale factor 1, no touch, not mobile.
    pub fn desktop(viewport: Viewport, user_agent: impl Into<String>, engine: Engine) -> Self {
        Self {
            viewport,
            user_agent: user_agent.into(),
            device_scale_factor: 1.0,
            is_mobile: false,
            has_touch: false,
            default_engine: engine,
        }
    }

    /// Mobile profile: mobile viewport semantics and touch input.
    pub fn mobile(
        viewport: Viewport,
        user_agent: impl Into<String>,
        device_scale_factor: f64,
        engine: Engine,
    ) -> Self {
        Self {
            viewport,
            user_agent: user_agent.into(),
            device_scale_factor,
            is_mobile: true,
            has_touch: true,
            default_engine: engine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_display_matches_serde_form() {
        assert_eq!(Engine::Chromium.to_string(), "chromium");
        assert_eq!(
            serde_json::to_string(&Engine::Webkit).unwrap(),
            "\"webkit\""
        );
    }

    #[test]
    fn desktop_profile_has_no_touch() {
        let device = DeviceDescriptor::desktop(
            Viewport::new(1280, 720),
            "Mozilla/5.0 (X11; Linux x86_64)",
            Engine::Firefox,
        );
        assert!(!device.is_mobile);
        assert!(!device.has_touch);
        assert_eq!(device.device_scale_factor, 1.0);
    }

    #[test]
    fn mobile_profile_has_touch() {
        let device = DeviceDescriptor::mobile(
            Viewport::new(393, 851),
            "Mozilla/5.0 (Linux; Android 11; Pixel 5)",
            2.75,
            Engine::Chromium,
        );
        assert!(device.is_mobile);
        assert!(device.has_touch);
    }
}
