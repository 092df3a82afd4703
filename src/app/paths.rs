// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`BEFORELIFE_DATA_DIR`, `BEFORELIFE_CONFIG_DIR`, `BEFORELIFE_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The assets directory additionally honours `[assets] base_path` from the
//! config file, between the environment variable and the platform default.
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(CliDirs { data_dir, config_dir, assets_dir });
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "BeforeLife";

/// Name of the assets directory below the data directory.
const ASSETS_DIR_NAME: &str = "assets";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "BEFORELIFE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BEFORELIFE_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "BEFORELIFE_ASSETS_DIR";

/// Directories given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliDirs {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    pub assets_dir: Option<String>,
}

static CLI_DIRS: OnceLock<CliDirs> = OnceLock::new();

/// Initializes CLI overrides for the application directories.
///
/// Must be called once at startup, before any path is resolved. Later calls
/// are ignored with a warning.
pub fn init_cli_overrides(dirs: CliDirs) {
    if CLI_DIRS.set(dirs).is_err() {
        tracing::warn!("CLI directory overrides already initialized; ignoring");
    }
}

fn cli_dir(select: impl Fn(&CliDirs) -> &Option<String>) -> Option<PathBuf> {
    CLI_DIRS
        .get()
        .and_then(|dirs| select(dirs).as_ref())
        .map(PathBuf::from)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application data directory path.
///
/// This directory stores the form progress snapshot.
///
/// - Linux: `~/.local/share/BeforeLife/`
/// - macOS: `~/Library/Application Support/BeforeLife/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\BeforeLife\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_dir(|dirs| &dirs.data_dir))
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the application config directory path.
///
/// This directory stores `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli_dir(|dirs| &dirs.config_dir))
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the directory holding `images/` and `audio/`.
///
/// `configured` is the `[assets] base_path` value from the config file. When
/// nothing is set, the assets are looked up in `assets/` below the data
/// directory.
pub fn get_assets_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    cli_dir(|dirs| &dirs.assets_dir)
        .or_else(|| env_dir(ENV_ASSETS_DIR))
        .or(configured)
        .or_else(|| get_app_data_dir().map(|path| path.join(ASSETS_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn assets_env_var_beats_configured_path() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let result = get_assets_dir(Some(PathBuf::from("/configured/assets")));
        assert_eq!(result, Some(PathBuf::from("/env/assets")));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn configured_assets_path_beats_data_dir_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        let result = get_assets_dir(Some(PathBuf::from("/configured/assets")));
        assert_eq!(result, Some(PathBuf::from("/configured/assets")));
    }

    #[test]
    fn assets_default_lives_under_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);
        std::env::set_var(ENV_DATA_DIR, "/data/root");

        assert_eq!(get_assets_dir(None), Some(PathBuf::from("/data/root/assets")));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
