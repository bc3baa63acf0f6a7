//! Pairwise Newtonian gravity with a radius cutoff
//!
//! Unlike a softened kernel, pairs closer than `radius` contribute nothing at
//! all. Nothing is merged; the cutoff only keeps `1 / r^2` away from its
//! singularity. With `radius == 0` two coincident masses still produce NaN,
//! which is left to propagate

use super::states::Mass;
use super::vector::NVec2;

/// Direct-sum gravity kernel used by the naive engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseGravity {
    pub g: f64, // gravitational constant
    pub radius: f64, // no force is computed for pairs closer than this
}

impl PairwiseGravity {
    pub fn new(g: f64, radius: f64) -> Self {
        Self { g, radius }
    }

    /// Acceleration of `m1` due to `m2`, or `None` when the pair is inside the
    /// cutoff radius
    pub fn acceleration(&self, m1: &Mass, m2: &Mass) -> Option<NVec2> {
        // displacement points from m1 to m2, so m1 is pulled along +displacement
        let displacement = m2.pos - m1.pos;
        let distance = displacement.norm();

        // Skip if inside radius
        if distance < self.radius {
            return None;
        }

        // Newton's universal gravitation: |F| = G * m1 * m2 / r^2
        let force_mag = self.g * (m1.mass * m2.mass) / distance.powi(2);

        // Force vector along the unit displacement
        let force = displacement.normalize() * force_mag;

        // Newton's second law: a = F / m1
        Some(force / m1.mass)
    }

    /// Explicit Euler velocity update of `m1` from every other mass in `field`
    /// - each pair outside the cutoff adds `a * dt` to `m1.vel`
    /// - `field[index]` is `m1` itself and is skipped, so a zero radius does
    ///   not turn the self pair into NaN
    pub fn kick(&self, m1: &mut Mass, index: usize, field: &[Mass], dt: f64) {
        for (j, m2) in field.iter().enumerate() {
            if j == index {
                continue;
            }
            if let Some(a) = self.acceleration(m1, m2) {
                m1.vel += a * dt;
            }
        }
    }
}
