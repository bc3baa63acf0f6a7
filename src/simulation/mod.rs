pub mod vector;
pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod naive;
pub mod demo;
pub mod scenario;
