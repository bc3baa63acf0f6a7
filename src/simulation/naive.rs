//! Double-buffered O(n^2) gravity engine
//!
//! `front` is the last committed frame and the only buffer readers ever see.
//! A tick integrates every mass of `front` into `back`, then swaps the two and
//! truncates the old front so its allocation is reused as the next `back`.
//! All three operations go through one reader/writer lock: `advance` and `admit`
//! take it exclusively, `read_frame` shares it with other readers

use parking_lot::RwLock;
use tracing::trace;

use super::engine::Simulation;
use super::forces::PairwiseGravity;
use super::params::Parameters;
use super::states::Mass;

#[derive(Debug)]
struct Buffers {
    front: Vec<Mass>, // committed frame, readable
    back: Vec<Mass>, // frame under construction, empty between ticks
}

impl Buffers {
    /// Promote the back buffer to the front, then clear the back
    fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.back.clear();
    }
}

/// Reference pairwise-gravity engine
#[derive(Debug)]
pub struct NaiveSimulation {
    buffers: RwLock<Buffers>,
    gravity: PairwiseGravity,
}

impl NaiveSimulation {
    /// Both buffers are allocated with `capacity`; they grow past it as needed
    pub fn new(capacity: usize, g: f64, radius: f64) -> Self {
        Self {
            buffers: RwLock::new(Buffers {
                front: Vec::with_capacity(capacity),
                back: Vec::with_capacity(capacity),
            }),
            gravity: PairwiseGravity::new(g, radius),
        }
    }

    pub fn from_params(params: &Parameters) -> Self {
        Self::new(params.capacity, params.g, params.radius)
    }
}

impl Simulation for NaiveSimulation {
    fn advance(&self, dt: f64) {
        let mut guard = self.buffers.write();
        let Buffers { front, back } = &mut *guard;
        let field: &[Mass] = front;

        // This is O(n^2)
        for (i, m1) in field.iter().enumerate() {
            let mut m1 = *m1;

            // Static masses keep their stored velocity
            if !m1.is_static {
                self.gravity.kick(&mut m1, i, field, dt);
            }

            // x += v dt, for every mass
            m1.pos += m1.vel * dt;

            back.push(m1);
        }

        guard.swap();
        trace!(masses = guard.front.len(), dt, "tick");
    }

    fn admit(&self, mass: Mass) {
        // Straight into the front buffer: visible to the next read and next tick
        self.buffers.write().front.push(mass);
    }

    fn read_frame(&self, visitor: &mut dyn FnMut(Mass) -> bool) {
        let guard = self.buffers.read();
        for mass in guard.front.iter() {
            if !visitor(*mass) {
                break;
            }
        }
    }
}
