pub mod simulation;
pub mod configuration;
pub mod runtime;
pub mod benchmark;

pub use simulation::vector::{NVec2, Vec2Fmt};
pub use simulation::states::Mass;
pub use simulation::engine::{Simulation, SimulationExt};
pub use simulation::forces::PairwiseGravity;
pub use simulation::naive::NaiveSimulation;
pub use simulation::demo::DemoSimulation;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ConfigError, SimulationKind, EngineConfig, ParametersConfig, SpawnerConfig, BodyConfig, ScenarioConfig};

pub use runtime::{frame::FrameStats, spawner::Spawner, headless::{run_headless, RunReport}};

pub use benchmark::benchmark::{bench_tick, bench_tick_curve, make_simulation};
