//! Headless driver: three threads sharing one simulation
//!
//! - the clock calls `advance(dt)` a fixed number of times
//! - the spawner (optional) admits one random mass per interval
//! - the reader samples a `FrameStats` every report interval
//!
//! The clock owns the only stop sender. Dropping it when ticking is done
//! disconnects the stop channel, which the other two threads `select!` on
//! next to their pacing tickers

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, tick, Receiver};
use tracing::{debug, info};

use crate::runtime::frame::FrameStats;
use crate::runtime::spawner::Spawner;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Outcome of one headless run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub ticks: u64,
    pub spawned: u64,
    pub reports: u64,
    pub elapsed: Duration,
    pub final_stats: FrameStats,
}

pub fn run_headless(sim: &dyn Simulation, params: &Parameters, spawner: Option<Spawner>) -> RunReport {
    let start = Instant::now();
    // never sent on, only disconnected
    let (stop_tx, stop_rx) = bounded::<()>(0);

    info!(ticks = params.ticks, dt = params.dt, realtime = params.realtime, "headless run starting");

    let (ticks, spawned, reports) = thread::scope(|s| {
        let clock = s.spawn(move || {
            let _stop = stop_tx;
            let pause = Duration::try_from_secs_f64(params.dt).unwrap_or_default();

            for _ in 0..params.ticks {
                sim.advance(params.dt);
                if params.realtime {
                    thread::sleep(pause);
                }
            }
            params.ticks
        });

        let producer = spawner.map(|mut spawner| {
            let stop = stop_rx.clone();
            s.spawn(move || {
                let mut spawned = 0u64;
                on_every(spawner.interval, &stop, || {
                    sim.admit(spawner.next_mass());
                    spawned += 1;
                });
                spawned
            })
        });

        let reader = s.spawn(move || {
            let mut reports = 0u64;
            on_every(params.report_interval, &stop_rx, || {
                let stats = FrameStats::collect(sim);
                debug!(report = reports, "{stats}");
                reports += 1;
            });
            reports
        });

        let ticks = join(clock);
        let spawned = producer.map(join).unwrap_or(0);
        let reports = join(reader);
        (ticks, spawned, reports)
    });

    let final_stats = FrameStats::collect(sim);
    let elapsed = start.elapsed();
    info!(ticks, spawned, reports, elapsed_ms = elapsed.as_millis() as u64, "headless run finished");

    RunReport {
        ticks,
        spawned,
        reports,
        elapsed,
        final_stats,
    }
}

/// Run `f` once per `interval` until `stop` disconnects
fn on_every(interval: Duration, stop: &Receiver<()>, mut f: impl FnMut()) {
    let ticker = tick(interval);
    loop {
        select! {
            recv(stop) -> _ => break,
            recv(ticker) -> _ => f(),
        }
    }
}

// Re-raise a worker panic on the calling thread
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e))
}
