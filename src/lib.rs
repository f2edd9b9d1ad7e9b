// src/lib.rs

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use math::{MathError, Vector3};
pub use models::{ModelError, Radar, Signal, Target, WorldMap};
pub use simulation::{EpisodeOutcome, EpisodeResult, SearchCycle, SearchSettings};
