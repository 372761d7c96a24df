//! XDG Base Directory paths for hollow.
//!
//! The workshop tools follow XDG paths on every platform rather than the
//! platform-native locations, the same way `gh` or `kubectl` do.

use std::path::PathBuf;

const APP_DIR: &str = "hollow";

/// Resolve `$<var>/hollow`, falling back to `~/<home_relative>/hollow`.
fn xdg_dir(var: &str, home_relative: &str) -> PathBuf {
    if let Ok(base) = std::env::var(var)
        && !base.is_empty()
    {
        return PathBuf::from(base).join(APP_DIR);
    }
    match dirs::home_dir() {
        Some(home) => home.join(home_relative).join(APP_DIR),
        None => PathBuf::from(home_relative).join(APP_DIR),
    }
}

/// Get the hollow config directory.
///
/// Returns `$XDG_CONFIG_HOME/hollow` if set, otherwise `~/.config/hollow`.
///
/// # Examples
///
/// ```
/// use hollow_paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("hollow"));
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the hollow data directory.
///
/// Returns `$XDG_DATA_HOME/hollow` if set, otherwise `~/.local/share/hollow`.
/// Log files written while the terminal viewer owns the screen live here.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Path of the user-level configuration file.
pub fn user_config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Path of the log file used by `hollow watch`.
pub fn log_file() -> PathBuf {
    data_dir().join("logs").join("hollow.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn config_dir_ends_with_hollow() {
        assert!(config_dir().ends_with("hollow"));
    }

    #[test]
    #[serial]
    fn data_dir_ends_with_hollow() {
        assert!(data_dir().ends_with("hollow"));
    }

    #[test]
    #[serial]
    fn config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        assert_eq!(config_dir(), PathBuf::from("/tmp/test-config/hollow"));
        assert_eq!(
            user_config_file(),
            PathBuf::from("/tmp/test-config/hollow/config.toml")
        );
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn empty_xdg_var_falls_back_to_home() {
        unsafe {
            std::env::set_var("XDG_DATA_HOME", "");
        }
        let path = data_dir();
        assert!(path.ends_with(".local/share/hollow"));
        unsafe {
            std::env::remove_var("XDG_DATA_HOME");
        }
    }

    #[test]
    #[serial]
    fn log_file_lives_under_data_dir() {
        unsafe {
            std::env::set_var("XDG_DATA_HOME", "/tmp/test-data");
        }
        assert_eq!(
            log_file(),
            PathBuf::from("/tmp/test-data/hollow/logs/hollow.log")
        );
        unsafe {
            std::env::remove_var("XDG_DATA_HOME");
        }
    }
}
