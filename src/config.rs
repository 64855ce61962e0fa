use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable that overrides the config file location
const CONFIG_PATH_ENV: &str = "BOOK_SHELF_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Color theme of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

/// Application configuration
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Insert the three sample books on startup
    pub seed_library: bool,
    /// Edge length of generated thumbnails, in pixels
    pub thumbnail_size: u32,
    /// Fetch and display card thumbnails
    pub load_thumbnails: bool,
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            seed_library: true,
            thumbnail_size: 256,
            load_thumbnails: true,
            log_filter: "book_shelf=info".to_string(),
        }
    }
}

/// Outcome of reading the config file at startup.
/// Reported with `report()` once logging is installed.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: AppConfig,
    /// File that was consulted, if a location could be determined
    pub path: Option<PathBuf>,
    /// Why the file was ignored, if it was
    pub error: Option<ConfigError>,
}

impl ConfigLoad {
    /// Log where the configuration came from
    pub fn report(&self) {
        match (&self.path, &self.error) {
            (Some(path), Some(e)) => {
                warn!("Ignoring config at {}: {}; using defaults", path.display(), e)
            }
            (Some(path), None) if path.exists() => info!("Loaded config from {}", path.display()),
            (Some(path), None) => info!("No config at {}; using defaults", path.display()),
            (None, _) => info!("No config directory available; using defaults"),
        }
    }
}

impl AppConfig {
    /// Load the configuration, falling back to defaults.
    /// A broken config file is kept in the result rather than aborting startup.
    pub fn load() -> ConfigLoad {
        Self::load_at(Self::config_path())
    }

    /// Load from an optional location, falling back to defaults on any error
    pub fn load_at(path: Option<PathBuf>) -> ConfigLoad {
        let Some(path) = path else {
            return ConfigLoad {
                config: Self::default(),
                path: None,
                error: None,
            };
        };

        let (config, error) = match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };

        ConfigLoad {
            config,
            path: Some(path),
            error,
        }
    }

    /// Read the configuration from a specific file.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Where the config file lives:
    /// - $BOOK_SHELF_CONFIG if set
    /// - Linux: ~/.config/book-shelf/config.json
    /// - macOS: ~/Library/Application Support/book-shelf/config.json
    /// - Windows: %APPDATA%\book-shelf\config.json
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("book-shelf");
        path.push("config.json");
        Some(path)
    }
}
