//! Aggregate statistics over one frame
//!
//! Stats are gathered in a single `read_frame` pass, so they always describe
//! one committed frame even while other threads tick or add masses

use std::fmt;

use crate::simulation::engine::Simulation;
use crate::simulation::states::Mass;
use crate::simulation::vector::{NVec2, Vec2Fmt};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    pub count: usize,
    pub total_mass: f64,
    pub momentum: NVec2, // sum of m * v
    pub weighted_pos: NVec2, // sum of m * x
    pub min: Option<NVec2>, // lower-left corner of the bounding box
    pub max: Option<NVec2>, // upper-right corner
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            count: 0,
            total_mass: 0.0,
            momentum: NVec2::zeros(),
            weighted_pos: NVec2::zeros(),
            min: None,
            max: None,
        }
    }
}

impl FrameStats {
    pub fn collect(sim: &dyn Simulation) -> Self {
        let mut stats = Self::default();
        sim.read_frame(&mut |m| {
            stats.push(&m);
            true
        });
        stats
    }

    pub fn from_masses(masses: &[Mass]) -> Self {
        let mut stats = Self::default();
        for m in masses {
            stats.push(m);
        }
        stats
    }

    fn push(&mut self, m: &Mass) {
        self.count += 1;
        self.total_mass += m.mass;
        self.momentum += m.momentum();
        self.weighted_pos += m.pos * m.mass;
        self.min = Some(match self.min {
            Some(lo) => lo.inf(&m.pos),
            None => m.pos,
        });
        self.max = Some(match self.max {
            Some(hi) => hi.sup(&m.pos),
            None => m.pos,
        });
    }

    /// Mass-weighted mean position, `None` when the frame carries no mass
    pub fn center_of_mass(&self) -> Option<NVec2> {
        if self.total_mass == 0.0 {
            return None;
        }
        Some(self.weighted_pos / self.total_mass)
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} m={:.2} p={}",
            self.count,
            self.total_mass,
            Vec2Fmt(&self.momentum)
        )?;
        if let Some(com) = self.center_of_mass() {
            write!(f, " com={}", Vec2Fmt(&com))?;
        }
        if let (Some(lo), Some(hi)) = (self.min, self.max) {
            write!(f, " bounds={}..{}", Vec2Fmt(&lo), Vec2Fmt(&hi))?;
        }
        Ok(())
    }
}
