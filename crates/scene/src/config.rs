use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::CameraPose;

/// Environment variable holding the map service access token.
pub const ACCESS_TOKEN_ENV: &str = "TRACKFLY_ACCESS_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flythrough timing and camera pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Flight duration per meter of route.
    pub ms_per_meter: f64,
    /// Bearing reached at the end of the flight, starting from 0.
    pub bearing_sweep_deg: f64,
    pub pitch_deg: f64,
    pub zoom: f64,
    /// Duration of the camera flight to the start point.
    pub approach_duration_ms: f64,
    /// The flythrough begins after `approach_duration_ms * approach_settle_factor`.
    pub approach_settle_factor: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            ms_per_meter: 4.0,
            bearing_sweep_deg: 200.0,
            pitch_deg: 50.0,
            zoom: 15.0,
            approach_duration_ms: 2000.0,
            approach_settle_factor: 1.2,
        }
    }
}

impl FlightConfig {
    pub fn duration_ms(&self, total_distance_m: f64) -> f64 {
        total_distance_m * self.ms_per_meter
    }

    /// Delay between the approach flight and the flythrough.
    pub fn start_delay_ms(&self) -> f64 {
        self.approach_duration_ms * self.approach_settle_factor.max(1.0)
    }
}

/// Camera fit applied on load and after a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub padding_px: f64,
    pub duration_ms: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            padding_px: 20.0,
            duration_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub default_url: String,
    pub satellite_url: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_url: "mapbox://styles/edwardonionc/clhbgbxbk000901pvgwba9sp0".to_string(),
            satellite_url: "mapbox://styles/mapbox/satellite-v9".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub enabled: bool,
    pub source_id: String,
    pub url: String,
    pub tile_size: u32,
    pub max_zoom: u32,
    pub exaggeration: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_id: "mapbox-dem".to_string(),
            url: "mapbox://mapbox.mapbox-terrain-dem-v1".to_string(),
            tile_size: 512,
            max_zoom: 14,
            exaggeration: 1.5,
        }
    }
}

/// Viewer settings. Every field has a default, so a config file only lists
/// what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub initial_view: CameraPose,
    pub flight: FlightConfig,
    pub fit: FitConfig,
    pub styles: StyleConfig,
    pub terrain: TerrainConfig,
    /// Map service token. Never baked in; see [`ACCESS_TOKEN_ENV`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl ViewerConfig {
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let payload = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&payload)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(token);
        }
        self
    }
}
