//! Configuration manager for loading and saving carousel configuration
//!
//! Configuration lives in `<data dir>/config.json`. Writes go through a
//! temporary file in the same directory that is then persisted over the
//! target, so a crash never leaves a half-written file behind.

use crate::config::models::CarouselConfig;
use crate::error::{CarouselError, Result, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the base of the data directory
pub const HOME_ENV_VAR: &str = "HERO_CAROUSEL_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the configuration and log files
    ///
    /// Returns: `$HERO_CAROUSEL_HOME/HeroCarousel`, or `./HeroCarousel` when unset
    pub fn get_data_dir() -> PathBuf {
        let base = std::env::var(HOME_ENV_VAR).unwrap_or_else(|_| ".".to_string());
        PathBuf::from(base).join("HeroCarousel")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_data_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<CarouselConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// A missing, unparsable or invalid file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<CarouselConfig> {
        if !path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(CarouselConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str::<CarouselConfig>(&json) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    info!("Configuration loaded from {}", path.display());
                    Ok(config)
                }
                Err(e) => {
                    warn!("Invalid configuration, using defaults: {e}");
                    Ok(CarouselConfig::default())
                }
            },
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {e}");
                Ok(CarouselConfig::default())
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(config: &CarouselConfig) -> Result<()> {
        Self::save_to(config, &Self::get_config_path())
    }

    /// Save configuration to `path` with an atomic replace
    pub fn save_to(config: &CarouselConfig, path: &Path) -> Result<()> {
        let dir = path.parent().ok_or_else(|| {
            CarouselError::ConfigError(StringError::new("Invalid config path"))
        })?;
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path)
            .map_err(|e| CarouselError::IoError(e.error))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
