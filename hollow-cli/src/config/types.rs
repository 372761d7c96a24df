use hollow_scene::{DEFAULT_THEME_ID, Viewport};
use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHollowConfig {
    #[serde(default)]
    pub scene: RawSceneConfig,

    #[serde(default)]
    pub watch: RawWatchConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSceneConfig {
    pub theme: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawWatchConfig {
    pub tick_ms: Option<u64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HollowConfig {
    #[serde(default)]
    pub scene: SceneConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    /// Theme id; unknown ids fall back to the default theme when rendering
    pub theme: String,

    /// Width of the SVG canvas
    pub width: u32,

    /// Height of the SVG canvas
    pub height: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            width: Viewport::DEFAULT.width,
            height: Viewport::DEFAULT.height,
        }
    }
}

impl SceneConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchConfig {
    /// Milliseconds between replayed frames
    pub tick_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

pub const DEFAULT_TICK_MS: u64 = 500;
