use nbody::{ScenarioConfig, Scenario};
use nbody::run_headless;
use nbody::{bench_tick, bench_tick_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the number of ticks from the scenario
    #[arg(long)]
    ticks: Option<u64>,

    /// Time the naive engine instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Like --bench, printed as CSV
    #[arg(long, conflicts_with = "bench")]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }
    if args.bench_curve {
        bench_tick_curve();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(ticks) = args.ticks {
        scenario_cfg.parameters.ticks = ticks;
    }

    let Scenario {
        parameters,
        simulation,
        spawner,
        ..
    } = Scenario::build_scenario(scenario_cfg)?;

    let report = run_headless(simulation.as_ref(), &parameters, spawner);
    info!(
        ticks = report.ticks,
        spawned = report.spawned,
        "final frame: {}",
        report.final_stats
    );

    Ok(())
}
