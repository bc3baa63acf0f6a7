//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which simulation to run and its buffer capacity
//! - [`ParametersConfig`] – physical constants and clock settings
//! - [`SpawnerConfig`]    – optional periodic random mass producer
//! - [`BodyConfig`]       – initial state for each mass
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   kind: "naive"           # or "demo"
//!   capacity: 10000
//!
//! parameters:
//!   g: 10000.0              # gravitational constant
//!   radius: 1.0             # no force between masses closer than this
//!   dt: 0.01                # seconds per tick
//!   ticks: 1000
//!   realtime: false         # sleep dt between ticks
//!   report_interval_ms: 250
//!
//! spawner:
//!   interval_ms: 100
//!   min: -500.0
//!   max: 500.0
//!   mass_min: 0.0
//!   mass_max: 10.0
//!   seed: 42
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1000.0
//!     static: true
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Reasons a scenario is rejected before anything is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("body {index}: `{field}` must have 2 components, got {len}")]
    Dimension {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("empty range for `{name}`: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("`{name}` must be greater than zero")]
    Zero { name: &'static str },
}

/// Which simulation the engine runs
/// kind: "naive"` or `kind: "demo"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationKind {
    #[serde(rename = "naive")] // Direct O(n^2) pairwise gravity
    #[default]
    Naive,

    #[serde(rename = "demo")] // Decorative sine waves, no physics
    Demo,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub kind: SimulationKind, // Simulation variant
    #[serde(default = "default_capacity")]
    pub capacity: usize, // Initial capacity of both mass buffers
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64, // gravitational constant
    pub radius: f64, // force cutoff radius
    pub dt: f64, // time step size
    pub ticks: u64, // number of ticks to run
    #[serde(default)]
    pub realtime: bool, // pace the clock against the wall clock
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64, // how often the frame reader samples
}

/// Periodic random mass producer
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnerConfig {
    pub interval_ms: u64, // one mass per interval
    pub min: f64, // lower bound of both position components
    pub max: f64, // upper bound (exclusive)
    pub mass_min: f64,
    pub mass_max: f64,
    #[serde(default)]
    pub seed: u64,
}

/// Configuration for a single mass's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>, // Initial velocity
    pub m: f64, // Mass
    #[serde(default, rename = "static")]
    pub is_static: bool, // Fixed in space
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub spawner: Option<SpawnerConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn default_capacity() -> usize {
    1024
}

fn default_report_interval_ms() -> u64 {
    250
}

fn zero_vec() -> Vec<f64> {
    vec![0.0, 0.0]
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject scenarios the runtime would choke on. Zero or negative masses
    /// are allowed and simply produce NaN or repulsion
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        finite("g", p.g)?;
        non_negative("radius", p.radius)?;
        non_negative("dt", p.dt)?;
        if p.report_interval_ms == 0 {
            return Err(ConfigError::Zero { name: "report_interval_ms" });
        }

        if let Some(s) = &self.spawner {
            if s.interval_ms == 0 {
                return Err(ConfigError::Zero { name: "spawner.interval_ms" });
            }
            range("spawner.min..max", s.min, s.max)?;
            range("spawner.mass_min..mass_max", s.mass_min, s.mass_max)?;
        }

        for (index, body) in self.bodies.iter().enumerate() {
            for (field, v) in [("x", &body.x), ("v", &body.v)] {
                if v.len() != 2 {
                    return Err(ConfigError::Dimension { index, field, len: v.len() });
                }
            }
        }

        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    finite(name, min)?;
    finite(name, max)?;
    if min >= max {
        return Err(ConfigError::EmptyRange { name, min, max });
    }
    Ok(())
}
