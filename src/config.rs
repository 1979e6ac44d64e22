//! # Configuration Management
//!
//! Loads runtime configuration from `matrix-weather.toml`: the BOM station
//! geohash, display tuning, cache location, and hardware pin/bus
//! assignments. A missing or invalid file falls back to the defaults so a
//! freshly flashed device still comes up.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from matrix-weather.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// BOM forecast location
    pub station: StationConfig,
    /// Display and power tuning
    pub display: DisplayConfig,
    /// Pin and bus assignments
    pub hardware: HardwareConfig,
}

/// BOM forecast location configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct StationConfig {
    /// BOM location geohash (e.g. "r1r0fs" for Melbourne)
    pub geohash: String,
    /// Human-readable location name for reference
    pub name: String,
}

/// Display and power tuning
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Per-column scroll delay in milliseconds
    pub scroll_delay_ms: u64,
    /// Idle time after the last button press before the indefinite sleep
    pub idle_timeout_ms: u64,
    /// Directory for cached BOM responses
    pub cache_dir: String,
    /// Cache TTL in minutes
    pub cache_ttl_minutes: u64,
}

/// Pin and bus assignments (BCM numbering)
#[derive(Debug, Deserialize, Serialize)]
pub struct HardwareConfig {
    /// GPIO for the view-cycle button
    pub button_a_pin: u8,
    /// GPIO for the rainbow button
    pub button_b_pin: u8,
    /// SPI device driving the WS2812 strip
    pub spi_device: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            station: StationConfig {
                geohash: "r1r0fs".to_string(),
                name: "Melbourne, VIC".to_string(),
            },
            display: DisplayConfig {
                scroll_delay_ms: 150,
                idle_timeout_ms: 10_000,
                cache_dir: "/tmp".to_string(),
                cache_ttl_minutes: 60,
            },
            hardware: HardwareConfig {
                button_a_pin: 5,
                button_b_pin: 6,
                spi_device: "/dev/spidev0.0".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from matrix-weather.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("matrix-weather.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    tracing::info!(station = %config.station.name, "loaded configuration");
                    config
                }
                Err(error) => {
                    tracing::warn!(%error, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Cache TTL in seconds, as the weather client wants it.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.display.cache_ttl_minutes * 60
    }
}
