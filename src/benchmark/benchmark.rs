use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::naive::NaiveSimulation;
use crate::simulation::states::Mass;
use crate::simulation::vector::NVec2;

/// Helper to build a naive engine holding `n` masses
/// deterministic positions, no rand needed
pub fn make_simulation(n: usize) -> NaiveSimulation {
    let sim = NaiveSimulation::new(n, 1.0, 0.01);

    for i in 0..n {
        let i_f = i as f64;
        let pos = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);
        sim.admit(Mass::new(pos, 1.0));
    }

    sim
}

/// Time one tick of the naive engine for growing n
pub fn bench_tick() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 2; // ticks per size

    for n in ns {
        let sim = make_simulation(n);

        // Warm up
        sim.advance(0.001);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.advance(0.001);
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, tick = {per_tick:8.6} s");
    }
}

/// Tick time over a range of n
/// Paste output directly into excel to graph
pub fn bench_tick_curve() {
    println!("N,tick_ms");

    // Steps of 200 to give smoother graph
    for n in (200..=4000).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1000 { 5 } else { 1 };

        let sim = make_simulation(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.advance(0.001);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
