// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{RadarParameters, SearchParameters};
pub use scenario::{Scenario, TargetInstance};
