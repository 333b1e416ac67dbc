//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("home-energy-tracker");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Store and journal file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Appliance catalog store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Append-only operation journal
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("appliances.txt") }
fn default_log_path() -> PathBuf { PathBuf::from("operations.txt") }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_path: default_log_path(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat rate per kWh, fixed for the lifetime of the tracker
    #[serde(default = "default_rate")]
    pub rate_per_kwh: f64,
    /// Currency symbol (presentation only, not part of the data contract)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_rate() -> f64 { 8.0 }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate_per_kwh: default_rate(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
