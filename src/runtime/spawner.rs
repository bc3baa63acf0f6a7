//! Random mass producer
//!
//! Masses appear at rest, uniformly distributed over a square, with a uniform
//! random mass. The RNG is seeded so runs are reproducible

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::SpawnerConfig;
use crate::simulation::states::Mass;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
    pub interval: Duration, // one mass per interval
    pub min: f64, // position lower bound (both axes)
    pub max: f64, // position upper bound, exclusive
    pub mass_min: f64,
    pub mass_max: f64,
}

impl Spawner {
    /// Positions in [-500, 500), masses in [0, 10), one every 100ms
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            interval: Duration::from_millis(100),
            min: -500.0,
            max: 500.0,
            mass_min: 0.0,
            mass_max: 10.0,
        }
    }

    /// # Panics
    ///
    /// [`next_mass`](Self::next_mass) panics if `cfg` has an empty position
    /// or mass range; run [`ScenarioConfig::validate`] first
    ///
    /// [`ScenarioConfig::validate`]: crate::configuration::config::ScenarioConfig::validate
    pub fn from_config(cfg: &SpawnerConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            interval: Duration::from_millis(cfg.interval_ms),
            min: cfg.min,
            max: cfg.max,
            mass_min: cfg.mass_min,
            mass_max: cfg.mass_max,
        }
    }

    /// Draw the next mass
    ///
    /// # Panics
    ///
    /// If `min >= max` or `mass_min >= mass_max`
    pub fn next_mass(&mut self) -> Mass {
        let pos = NVec2::new(
            self.rng.gen_range(self.min..self.max),
            self.rng.gen_range(self.min..self.max),
        );
        let mass = self.rng.gen_range(self.mass_min..self.mass_max);
        Mass::new(pos, mass)
    }
}
