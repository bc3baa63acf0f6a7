//! Headless collaborators driving a simulation: the clock, a random mass
//! producer and a frame reader that samples statistics

pub mod frame;
pub mod spawner;
pub mod headless;
