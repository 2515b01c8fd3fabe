//! # Settings
//!
//! Aquamon is configured with a single TOML file. Every key is optional,
//! a missing file is treated as an empty one.
//!
//! ## Example
//!
//! ```toml
//! interval_ms = 5000
//!
//! [tuning]
//! relative_jitter = 0.05
//! ph_jitter = 0.1
//!
//! [bounding_box]
//! north_lat = -25.4
//! west_lng = 27.9
//! ```

use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Read the settings file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("`{}` is missing, using the default settings.", path.display());
        return Ok(Settings::default());
    }
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

/// Represents a root settings object.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Feed simulator tick interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Perturbation magnitudes applied on every tick.
    #[serde(default)]
    pub tuning: Tuning,

    /// The map region that sensor positions are projected onto.
    #[serde(default)]
    pub bounding_box: BoundingBox,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            tuning: Tuning::default(),
            bounding_box: BoundingBox::default(),
        }
    }
}

fn default_interval_ms() -> u64 {
    5000
}

/// How hard the simulator shakes the readings.
#[derive(Deserialize, Debug, Clone)]
pub struct Tuning {
    /// Relative jitter applied to flow, pressure and temperature readings.
    #[serde(default = "default_relative_jitter")]
    pub relative_jitter: f64,

    /// Absolute jitter applied to pH readings.
    #[serde(default = "default_ph_jitter")]
    pub ph_jitter: f64,

    /// Largest random walk step of the Wi-Fi strength gauge, in percents.
    #[serde(default = "default_wifi_step")]
    pub wifi_step: f64,

    /// Largest battery drain per tick, in percents.
    #[serde(default = "default_battery_drain")]
    pub battery_drain: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            relative_jitter: default_relative_jitter(),
            ph_jitter: default_ph_jitter(),
            wifi_step: default_wifi_step(),
            battery_drain: default_battery_drain(),
        }
    }
}

fn default_relative_jitter() -> f64 {
    0.05
}

fn default_ph_jitter() -> f64 {
    0.1
}

fn default_wifi_step() -> f64 {
    5.0
}

fn default_battery_drain() -> f64 {
    0.1
}
