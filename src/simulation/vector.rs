//! 2D vector primitive used by the engine
//!
//! `NVec2` is nalgebra's `Vector2<f64>`, so add/sub (`a + b`, `a - b`),
//! scale/div by a scalar (`v * s`, `v / s`), `norm()` and `normalize()`
//! all come from nalgebra's operator overloads. Every operation returns a new
//! value; NaN/Inf propagate as plain IEEE-754 floats (`normalize()` of the zero
//! vector is NaN)

use std::fmt;

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Display adapter printing a vector as `<x, y>` with two decimals
pub struct Vec2Fmt<'a>(pub &'a NVec2);

impl fmt::Display for Vec2Fmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2}, {:.2}>", self.0.x, self.0.y)
    }
}
