//! Capability interface shared by every simulation variant
//!
//! The physical engine ([`NaiveSimulation`](super::naive::NaiveSimulation))
//! and the decorative one ([`DemoSimulation`](super::demo::DemoSimulation))
//! both implement [`Simulation`]. Drivers hold an `Arc<dyn Simulation>` and
//! may call all three operations from different threads at once

use super::states::Mass;

/// An n-body simulation that can be ticked forward through time
pub trait Simulation: Send + Sync {
    /// Advance the simulation by `dt` seconds (any value, not fixed-step)
    fn advance(&self, dt: f64);

    /// Add a mass to the simulation
    fn admit(&self, mass: Mass);

    /// Call `visitor` once per mass in the current frame, stopping as soon as it
    /// returns `false`. The visitor must not call back into the same simulation
    fn read_frame(&self, visitor: &mut dyn FnMut(Mass) -> bool);
}

/// Frame helpers built on [`Simulation::read_frame`], available on every
/// simulation including `dyn Simulation`
pub trait SimulationExt: Simulation {
    /// Copy of the whole current frame
    fn snapshot(&self) -> Vec<Mass> {
        let mut out = Vec::new();
        self.read_frame(&mut |m| {
            out.push(m);
            true
        });
        out
    }

    /// Number of masses in the current frame
    fn len(&self) -> usize {
        let mut n = 0;
        self.read_frame(&mut |_| {
            n += 1;
            true
        });
        n
    }

    fn is_empty(&self) -> bool {
        let mut empty = true;
        self.read_frame(&mut |_| {
            empty = false;
            false
        });
        empty
    }
}

impl<S: Simulation + ?Sized> SimulationExt for S {}
