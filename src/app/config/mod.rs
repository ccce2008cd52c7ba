// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Image search endpoint, key and request parameters
//! - `[gallery]` - Thumbnail grid and lightbox settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` or `load_with_override()` with an explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! println!("{} results per page", config.per_page());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (API request parameters)
// =============================================================================

/// Kind of image requested from the search API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    All,
    #[default]
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    /// Value sent in the `image_type` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            ImageType::All => "all",
            ImageType::Photo => "photo",
            ImageType::Illustration => "illustration",
            ImageType::Vector => "vector",
        }
    }
}

/// Image orientation filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    All,
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Value sent in the `orientation` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Orientation::All => "all",
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Image search API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Search endpoint URL.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key. Falls back to the `PIXABAY_API_KEY` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Number of records per page.
    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Kind of images requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,

    /// Orientation filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// HTTP request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            key: None,
            per_page: default_per_page(),
            image_type: Some(ImageType::default()),
            orientation: Some(Orientation::default()),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Thumbnail grid and lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnail tile width in logical pixels.
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<f32>,

    /// Number of full-size images kept in memory.
    #[serde(
        default = "default_full_image_cache_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_image_cache_size: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: default_thumbnail_width(),
            full_image_cache_size: default_full_image_cache_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Image search API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Thumbnail grid and lightbox settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Page size clamped to the range accepted by the API.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.api
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
    }

    /// Request timeout clamped to a sane range.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.api
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    }

    /// Thumbnail width clamped to the supported range.
    #[must_use]
    pub fn thumbnail_width(&self) -> f32 {
        self.gallery
            .thumbnail_width
            .unwrap_or(DEFAULT_THUMBNAIL_WIDTH)
            .clamp(MIN_THUMBNAIL_WIDTH, MAX_THUMBNAIL_WIDTH)
    }

    /// Full image cache capacity, at least one entry.
    #[must_use]
    pub fn full_image_cache_size(&self) -> usize {
        self.gallery
            .full_image_cache_size
            .unwrap_or(DEFAULT_FULL_IMAGE_CACHE_SIZE)
            .clamp(1, MAX_FULL_IMAGE_CACHE_SIZE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_API_ENDPOINT.to_string())
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_full_image_cache_size() -> Option<usize> {
    Some(DEFAULT_FULL_IMAGE_CACHE_SIZE)
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

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config dir");
        }
        let content = toml::to_string_pretty(config).expect("config should serialize");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_config_loads_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                endpoint: Some("https://example.test/api/".to_string()),
                key: Some("secret".to_string()),
                per_page: Some(40),
                image_type: Some(ImageType::Illustration),
                orientation: Some(Orientation::Vertical),
                timeout_secs: Some(30),
            },
            gallery: GalleryConfig {
                thumbnail_width: Some(200.0),
                full_image_cache_size: Some(4),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
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
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.endpoint.as_deref(), Some(DEFAULT_API_ENDPOINT));
        assert_eq!(config.api.key, None);
        assert_eq!(config.api.per_page, Some(DEFAULT_PER_PAGE));
        assert_eq!(config.api.image_type, Some(ImageType::Photo));
        assert_eq!(config.api.orientation, Some(Orientation::Horizontal));
        assert_eq!(config.per_page(), 12);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[api]\nkey = \"abc\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.api.key.as_deref(), Some("abc"));
        assert_eq!(loaded.api.per_page, Some(DEFAULT_PER_PAGE));
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            api: ApiConfig {
                per_page: Some(1),
                timeout_secs: Some(10_000),
                ..ApiConfig::default()
            },
            gallery: GalleryConfig {
                thumbnail_width: Some(10.0),
                full_image_cache_size: Some(0),
            },
            ..Config::default()
        };

        assert_eq!(config.per_page(), MIN_PER_PAGE);
        assert_eq!(config.timeout_secs(), MAX_TIMEOUT_SECS);
        assert_eq!(config.thumbnail_width(), MIN_THUMBNAIL_WIDTH);
        assert_eq!(config.full_image_cache_size(), 1);
    }

    #[test]
    fn query_values_match_api_vocabulary() {
        assert_eq!(ImageType::Photo.as_query_value(), "photo");
        assert_eq!(ImageType::All.as_query_value(), "all");
        assert_eq!(Orientation::Horizontal.as_query_value(), "horizontal");
        assert_eq!(Orientation::Vertical.as_query_value(), "vertical");
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join("settings.toml"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
