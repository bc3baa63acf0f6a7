//! Core state type for the n-body simulation
//!
//! A `Mass` is a plain value living inside an engine buffer. It has no
//! identity: two masses with equal fields are equal, and its index in the
//! buffer is not stable across ticks

use super::vector::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    pub pos: NVec2, // position
    pub vel: NVec2, // velocity, always zero for static masses
    pub mass: f64, // mass
    pub is_static: bool, // true if fixed in space
}

impl Mass {
    /// Free mass at rest
    pub fn new(pos: NVec2, mass: f64) -> Self {
        Self {
            pos,
            vel: NVec2::zeros(),
            mass,
            is_static: false,
        }
    }

    /// Static mass: attracts others but never moves
    pub fn fixed(pos: NVec2, mass: f64) -> Self {
        Self {
            pos,
            vel: NVec2::zeros(),
            mass,
            is_static: true,
        }
    }

    pub fn with_velocity(mut self, vel: NVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.vel * self.mass
    }
}
