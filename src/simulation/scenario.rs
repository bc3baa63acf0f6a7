//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! bundle containing:
//! - the selected simulation behind `Arc<dyn Simulation>`, seeded with the
//!   configured bodies
//! - numerical parameters (`Parameters`)
//! - the optional random spawner
//!
//! The bundle is handed to the headless driver, which shares the simulation
//! between its clock, spawner and frame reader threads

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig, SimulationKind};
use crate::runtime::spawner::Spawner;
use crate::simulation::demo::DemoSimulation;
use crate::simulation::engine::Simulation;
use crate::simulation::naive::NaiveSimulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::Mass;
use crate::simulation::vector::NVec2;

pub struct Scenario {
    pub kind: SimulationKind,
    pub parameters: Parameters,
    pub simulation: Arc<dyn Simulation>,
    pub spawner: Option<Spawner>,
}

impl Scenario {
    /// Validates `cfg` first, so bodies and spawner ranges are known good
    /// before anything indexes or samples them
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            capacity: cfg.engine.capacity,
            g: p_cfg.g,
            radius: p_cfg.radius,
            dt: p_cfg.dt,
            ticks: p_cfg.ticks,
            realtime: p_cfg.realtime,
            report_interval: Duration::from_millis(p_cfg.report_interval_ms),
        };

        let simulation: Arc<dyn Simulation> = match cfg.engine.kind {
            SimulationKind::Naive => Arc::new(NaiveSimulation::from_params(&parameters)),
            SimulationKind::Demo => Arc::new(DemoSimulation::new()),
        };

        // Bodies: map `BodyConfig` -> runtime `Mass`
        for body in cfg.bodies.iter().map(body_to_mass) {
            simulation.admit(body);
        }

        let spawner = cfg.spawner.as_ref().map(Spawner::from_config);

        info!(
            kind = ?cfg.engine.kind,
            bodies = cfg.bodies.len(),
            spawner = spawner.is_some(),
            "scenario built"
        );

        Ok(Self {
            kind: cfg.engine.kind,
            parameters,
            simulation,
            spawner,
        })
    }
}

// Only called on validated bodies: `x` and `v` have exactly two components
fn body_to_mass(bc: &BodyConfig) -> Mass {
    let pos = NVec2::new(bc.x[0], bc.x[1]);
    if bc.is_static {
        // static masses never carry velocity, whatever the file says
        return Mass::fixed(pos, bc.m);
    }
    Mass::new(pos, bc.m).with_velocity(NVec2::new(bc.v[0], bc.v[1]))
}
