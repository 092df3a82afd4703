// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes the file; it is
//! edited by whoever installs the piece.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language, theme mode and start view
//! - `[assets]` - Asset directory and image extensions
//! - `[timing]` - Transition, autoplay and typing intervals
//! - `[text]` - Scrolling text piece (camera, sound, speed)
//! - `[submission]` - Form delivery service credentials
//! - `[hosting]` - Image hosting account
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `BEFORELIFE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Secrets
//!
//! Service credentials may be left out of the file and supplied through
//! `BEFORELIFE_EMAILJS_*` and `BEFORELIFE_CLOUDINARY_*` environment
//! variables instead, see [`Config::apply_env_overrides`].
//!
//! # Examples
//!
//! ```no_run
//! use beforelife::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Credentials from the environment win over the file
//! config.apply_env_overrides();
//! assert!(config.timing.transition().as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variables read by [`Config::apply_env_overrides`].
pub const ENV_EMAILJS_SERVICE_ID: &str = "BEFORELIFE_EMAILJS_SERVICE_ID";
pub const ENV_EMAILJS_TEMPLATE_ID: &str = "BEFORELIFE_EMAILJS_TEMPLATE_ID";
pub const ENV_EMAILJS_PUBLIC_KEY: &str = "BEFORELIFE_EMAILJS_PUBLIC_KEY";
pub const ENV_CLOUDINARY_CLOUD_NAME: &str = "BEFORELIFE_CLOUDINARY_CLOUD_NAME";
pub const ENV_CLOUDINARY_UPLOAD_PRESET: &str = "BEFORELIFE_CLOUDINARY_UPLOAD_PRESET";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// View shown at startup (e.g., "gallery", "byPrompt").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_view: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            start_view: None,
        }
    }
}

/// Where the image sets and narration clips live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Root directory containing `images/` and `audio/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Extension of gallery and prompt images.
    #[serde(
        default = "default_image_extension",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_extension: Option<String>,

    /// Extension of the per-contributor archive images.
    #[serde(
        default = "default_archive_extension",
        skip_serializing_if = "Option::is_none"
    )]
    pub archive_extension: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            image_extension: default_image_extension(),
            archive_extension: default_archive_extension(),
        }
    }
}

impl AssetsConfig {
    #[must_use]
    pub fn image_extension(&self) -> &str {
        self.image_extension
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_EXTENSION)
    }

    #[must_use]
    pub fn archive_extension(&self) -> &str {
        self.archive_extension
            .as_deref()
            .unwrap_or(DEFAULT_ARCHIVE_EXTENSION)
    }
}

/// Timer settings, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    #[serde(
        default = "default_typewriter_char_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub typewriter_char_ms: Option<u64>,

    #[serde(
        default = "default_loader_char_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub loader_char_ms: Option<u64>,

    #[serde(
        default = "default_slideshow_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slideshow_interval_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            typewriter_char_ms: default_typewriter_char_ms(),
            loader_char_ms: default_loader_char_ms(),
            slideshow_interval_ms: default_slideshow_interval_ms(),
        }
    }
}

impl TimingConfig {
    /// Loading indicator duration after a view switch.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(
            self.transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .max(1),
        )
    }

    /// Quiet period before autoplay advances, clamped to the supported range.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(
            self.autoplay_interval_ms
                .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
                .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn typewriter_char(&self) -> Duration {
        Duration::from_millis(
            self.typewriter_char_ms
                .unwrap_or(DEFAULT_TYPEWRITER_CHAR_MS)
                .max(1),
        )
    }

    #[must_use]
    pub fn loader_char(&self) -> Duration {
        Duration::from_millis(self.loader_char_ms.unwrap_or(DEFAULT_LOADER_CHAR_MS).max(1))
    }

    #[must_use]
    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(
            self.slideshow_interval_ms
                .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_MS)
                .max(MIN_AUTOPLAY_INTERVAL_MS),
        )
    }
}

/// Scrolling text piece settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextConfig {
    /// Whether the camera starts enabled when the view opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_enabled: Option<bool>,

    /// Whether phrase narration starts enabled.
    #[serde(
        default = "default_sound_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub sound_enabled: Option<bool>,

    /// Scroll speed in pixels per second.
    #[serde(
        default = "default_scroll_px_per_sec",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_px_per_sec: Option<f32>,

    /// Consecutive playback failures before narration is disabled.
    #[serde(
        default = "default_max_audio_failures",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_audio_failures: Option<u32>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            camera_enabled: Some(false),
            sound_enabled: default_sound_enabled(),
            scroll_px_per_sec: default_scroll_px_per_sec(),
            max_audio_failures: default_max_audio_failures(),
        }
    }
}

impl TextConfig {
    #[must_use]
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_px_per_sec
            .unwrap_or(DEFAULT_SCROLL_PX_PER_SEC)
            .clamp(MIN_SCROLL_PX_PER_SEC, MAX_SCROLL_PX_PER_SEC)
    }

    #[must_use]
    pub fn failure_limit(&self) -> u32 {
        self.max_audio_failures
            .unwrap_or(DEFAULT_MAX_AUDIO_FAILURES)
            .max(1)
    }
}

/// Credentials of the form delivery service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SubmissionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl SubmissionConfig {
    /// Whether every credential is present and non-empty.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Image hosting account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    #[serde(
        default = "default_upload_preset",
        skip_serializing_if = "Option::is_none"
    )]
    pub upload_preset: Option<String>,

    #[serde(
        default = "default_upload_folder",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder: Option<String>,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            upload_preset: default_upload_preset(),
            folder: default_upload_folder(),
        }
    }
}

impl HostingConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.cloud_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    #[must_use]
    pub fn upload_preset(&self) -> &str {
        self.upload_preset.as_deref().unwrap_or(DEFAULT_UPLOAD_PRESET)
    }

    #[must_use]
    pub fn folder(&self) -> &str {
        self.folder.as_deref().unwrap_or(DEFAULT_UPLOAD_FOLDER)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub text: TextConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub hosting: HostingConfig,
}

impl Config {
    /// Fills service credentials from the process environment.
    ///
    /// Non-empty environment values replace the values from the file.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Same as [`Config::apply_env_overrides`] with a custom lookup.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = read(ENV_EMAILJS_SERVICE_ID) {
            self.submission.service_id = Some(value);
        }
        if let Some(value) = read(ENV_EMAILJS_TEMPLATE_ID) {
            self.submission.template_id = Some(value);
        }
        if let Some(value) = read(ENV_EMAILJS_PUBLIC_KEY) {
            self.submission.public_key = Some(value);
        }
        if let Some(value) = read(ENV_CLOUDINARY_CLOUD_NAME) {
            self.hosting.cloud_name = Some(value);
        }
        if let Some(value) = read(ENV_CLOUDINARY_UPLOAD_PRESET) {
            self.hosting.upload_preset = Some(value);
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_image_extension() -> Option<String> {
    Some(DEFAULT_IMAGE_EXTENSION.to_string())
}

fn default_archive_extension() -> Option<String> {
    Some(DEFAULT_ARCHIVE_EXTENSION.to_string())
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_typewriter_char_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_CHAR_MS)
}

fn default_loader_char_ms() -> Option<u64> {
    Some(DEFAULT_LOADER_CHAR_MS)
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn default_sound_enabled() -> Option<bool> {
    Some(true)
}

fn default_scroll_px_per_sec() -> Option<f32> {
    Some(DEFAULT_SCROLL_PX_PER_SEC)
}

fn default_max_audio_failures() -> Option<u32> {
    Some(DEFAULT_MAX_AUDIO_FAILURES)
}

fn default_upload_preset() -> Option<String> {
    Some(DEFAULT_UPLOAD_PRESET.to_string())
}

fn default_upload_folder() -> Option<String> {
    Some(DEFAULT_UPLOAD_FOLDER.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "en-US"
theme_mode = "light"
start_view = "byPrompt"

[assets]
base_path = "/srv/installation"

[timing]
autoplay_interval_ms = 4500

[text]
camera_enabled = true
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let expected = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Light,
                start_view: Some("byPrompt".to_string()),
            },
            assets: AssetsConfig {
                base_path: Some(PathBuf::from("/srv/installation")),
                ..AssetsConfig::default()
            },
            timing: TimingConfig {
                autoplay_interval_ms: Some(4500),
                ..TimingConfig::default()
            },
            text: TextConfig {
                camera_enabled: Some(true),
                ..TextConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[text]\ncamera_enabled = true\n").expect("write");

        let config = load_from_path(&path).expect("load");

        assert_eq!(config.text.camera_enabled, Some(true));
        assert_eq!(config.text.sound_enabled, Some(true));
        assert_eq!(config.timing.transition(), Duration::from_millis(500));
        assert_eq!(config.hosting.folder(), "before-life-after-life");
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.assets.image_extension(), "jpg");
        assert_eq!(config.assets.archive_extension(), "png");
        assert_eq!(config.timing.autoplay_interval(), Duration::from_secs(3));
        assert_eq!(config.timing.typewriter_char(), Duration::from_millis(15));
        assert_eq!(config.timing.loader_char(), Duration::from_millis(50));
        assert_eq!(config.text.failure_limit(), 3);
        assert_eq!(config.hosting.upload_preset(), "ml_default");
        assert!(!config.submission.is_configured());
        assert!(!config.hosting.is_configured());
    }

    #[test]
    fn autoplay_interval_is_clamped() {
        let timing = TimingConfig {
            autoplay_interval_ms: Some(1),
            ..TimingConfig::default()
        };
        assert_eq!(
            timing.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn env_overrides_fill_credentials() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_EMAILJS_SERVICE_ID, "service_x"),
            (ENV_EMAILJS_TEMPLATE_ID, "template_y"),
            (ENV_EMAILJS_PUBLIC_KEY, "key_z"),
            (ENV_CLOUDINARY_CLOUD_NAME, "demo"),
            (ENV_CLOUDINARY_UPLOAD_PRESET, "   "),
        ]);
        let mut config = Config::default();

        config.apply_overrides_from(|key| env.get(key).map(|v| (*v).to_string()));

        assert!(config.submission.is_configured());
        assert_eq!(config.hosting.cloud_name.as_deref(), Some("demo"));
        // Blank values leave the file value untouched.
        assert_eq!(config.hosting.upload_preset(), "ml_default");
    }

    #[test]
    fn load_with_override_reads_the_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join(CONFIG_FILE),
            "[hosting]\ncloud_name = \"installation\"\n",
        )
        .expect("write");

        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.hosting.cloud_name.as_deref(), Some("installation"));
    }
}
