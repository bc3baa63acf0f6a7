//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - buffer capacity hint,
//! - gravitational constant `g` and cutoff `radius`,
//! - tick size, tick count and pacing for the headless clock,
//! - how often the frame reader reports

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub capacity: usize, // initial buffer capacity
    pub g: f64, // gravitational constant
    pub radius: f64, // force cutoff radius
    pub dt: f64, // step size
    pub ticks: u64, // number of ticks the clock runs
    pub realtime: bool, // sleep dt between ticks
    pub report_interval: Duration, // frame reader period
}
