use super::types::{
    DEFAULT_TICK_MS, HollowConfig, RawHollowConfig, RawSceneConfig, RawWatchConfig, SceneConfig,
    WatchConfig,
};
use anyhow::{Context, Result};
use hollow_scene::{DEFAULT_THEME_ID, Viewport};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<HollowConfig> {
        Self::load_layers(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Merge the two layers; a missing file contributes nothing.
    pub fn load_layers(user_path: &Path, project_path: &Path) -> Result<HollowConfig> {
        let mut raw = RawHollowConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_raw(user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_raw(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        let config = Self::finalize(raw);
        if !hollow_scene::is_registered(&config.scene.theme) {
            tracing::warn!(
                theme = %config.scene.theme,
                "Configured theme is not registered, rendering will use the default"
            );
        }
        Ok(config)
    }

    fn read_raw(path: &Path) -> Result<Option<RawHollowConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config layer");
        Ok(Some(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/hollow/config.toml`)
    pub fn user_config_path() -> PathBuf {
        hollow_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with HOLLOW_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("HOLLOW_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".hollow/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawHollowConfig, overlay: RawHollowConfig) -> RawHollowConfig {
        RawHollowConfig {
            scene: RawSceneConfig {
                theme: overlay.scene.theme.or(base.scene.theme),
                width: overlay.scene.width.or(base.scene.width),
                height: overlay.scene.height.or(base.scene.height),
            },
            watch: RawWatchConfig {
                tick_ms: overlay.watch.tick_ms.or(base.watch.tick_ms),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawHollowConfig) -> HollowConfig {
        HollowConfig {
            scene: SceneConfig {
                theme: raw
                    .scene
                    .theme
                    .unwrap_or_else(|| DEFAULT_THEME_ID.to_string()),
                width: raw.scene.width.unwrap_or(Viewport::DEFAULT.width),
                height: raw.scene.height.unwrap_or(Viewport::DEFAULT.height),
            },
            watch: WatchConfig {
                tick_ms: raw.watch.tick_ms.unwrap_or(DEFAULT_TICK_MS),
            },
        }
    }
}
