//! Decorative simulation without physics
//!
//! Draws a band of sine waves that scroll with time. Useful for exercising a
//! frame consumer without paying for the O(n^2) engine

use parking_lot::RwLock;

use super::engine::Simulation;
use super::states::Mass;
use super::vector::NVec2;

#[derive(Debug, Default)]
pub struct DemoSimulation {
    time: RwLock<f64>,
}

impl DemoSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> f64 {
        *self.time.read()
    }
}

impl Simulation for DemoSimulation {
    fn advance(&self, dt: f64) {
        *self.time.write() += dt;
    }

    // Added masses are ignored
    fn admit(&self, _mass: Mass) {}

    fn read_frame(&self, visitor: &mut dyn FnMut(Mass) -> bool) {
        let t = self.time();

        let mut x = -200.0_f64;
        while x < 200.0 {
            let mut ofs = 0.0_f64;
            while ofs < 4.0 {
                let val = (t + ofs + x / 100.0).sin();
                let m = Mass::new(NVec2::new(x, val * 100.0), 0.0);
                if !visitor(m) {
                    return;
                }
                ofs += 0.04;
            }
            x += 1.0;
        }
    }
}
