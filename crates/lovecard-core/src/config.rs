//! Card configuration.
//!
//! Everything has a default; a JSON file may override any subset:
//!
//! ```json
//! {
//!   "snap": { "tolerance": 0.03, "ease": "power3.out" },
//!   "barrier_fallback_ms": null,
//!   "window": { "width": 1280, "height": 860 }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CardError, CardResult};
use crate::snap::SnapConfig;
use crate::style::Viewport;

/// File name looked up under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Desktop window size, also the default viewport for headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl WindowConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Heights of the free-flowing sections, in viewport heights. Only used to
/// build synthetic layouts when nothing has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowHeights {
    pub special: f64,
    pub gallery: f64,
    pub finale: f64,
}

impl Default for FlowHeights {
    fn default() -> Self {
        Self {
            special: 1.2,
            gallery: 1.6,
            finale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    pub snap: SnapConfig,
    /// Proceed with coordination after this long even if some participant
    /// never reports ready; `null` waits forever
    pub barrier_fallback_ms: Option<u64>,
    /// Scroll idle time that counts as the end of a gesture
    pub scroll_end_ms: u64,
    /// Scroll offset past which the navbar switches to its solid style
    pub nav_threshold: f64,
    pub window: WindowConfig,
    pub flow_heights: FlowHeights,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            snap: SnapConfig::default(),
            barrier_fallback_ms: Some(3000),
            scroll_end_ms: 150,
            nav_threshold: 100.0,
            window: WindowConfig::default(),
            flow_heights: FlowHeights::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a config file.
    pub fn load(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `explicit` if given, else the default config file if it exists,
    /// else the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> CardResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CardResult<()> {
        let snap = &self.snap;
        if !(snap.tolerance >= 0.0 && snap.tolerance < 0.5) {
            return Err(CardError::Config(format!(
                "snap.tolerance must be in [0, 0.5), got {}",
                snap.tolerance
            )));
        }
        if !(snap.min_duration >= 0.0 && snap.min_duration <= snap.max_duration) {
            return Err(CardError::Config(format!(
                "snap durations must satisfy 0 <= min <= max, got {}..{}",
                snap.min_duration, snap.max_duration
            )));
        }
        if snap.delay < 0.0 {
            return Err(CardError::Config("snap.delay must not be negative".into()));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(CardError::Config("window size must be positive".into()));
        }
        let flow = &self.flow_heights;
        if [flow.special, flow.gallery, flow.finale].iter().any(|h| *h < 0.0) {
            return Err(CardError::Config("flow heights must not be negative".into()));
        }
        Ok(())
    }

    pub fn barrier_fallback(&self) -> Option<Duration> {
        self.barrier_fallback_ms.map(Duration::from_millis)
    }

    pub fn scroll_end(&self) -> Duration {
        Duration::from_millis(self.scroll_end_ms)
    }
}

/// `<config dir>/lovecard/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lovecard").join(CONFIG_FILE_NAME))
}
