//! Runtime configuration: screen geometry and frame rate.
//!
//! Loaded from TOML at `$RUNNER_CONFIG` (default `config/runner.toml`).
//! Every field is optional and falls back to the built-in defaults.

use super::constants::{FLOOR_HEIGHT, FRAMES_PER_SECOND, SCREEN_HEIGHT, SCREEN_WIDTH};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "RUNNER_CONFIG";

/// Path used when `RUNNER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/runner.toml";

/// Screen geometry the simulation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
    /// Thickness of the floor strip at the bottom of the screen.
    pub floor_height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            floor_height: FLOOR_HEIGHT,
        }
    }
}

impl ScreenConfig {
    /// Y coordinate of the floor line (where the player's feet rest).
    pub fn floor_y(&self) -> i32 {
        self.height - self.floor_height
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.floor_height >= 0 && self.floor_y() > 0
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub screen: ScreenConfig,
    pub fps: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            fps: FRAMES_PER_SECOND,
        }
    }
}

impl RunnerConfig {
    /// Load the config file. A missing file yields the defaults; an
    /// unreadable or invalid one yields the defaults and a warning.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Parse a TOML document, replacing out-of-range values with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RunnerConfig>(content).map(Self::validated)
    }

    fn validated(mut self) -> Self {
        if !self.screen.is_valid() {
            tracing::warn!(screen = ?self.screen, "Invalid screen geometry, using defaults");
            self.screen = ScreenConfig::default();
        }
        if self.fps == 0 {
            tracing::warn!("fps must be positive, using {FRAMES_PER_SECOND}");
            self.fps = FRAMES_PER_SECOND;
        }
        self
    }
}
