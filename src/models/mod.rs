// src/models/mod.rs

pub mod error;
pub mod radar;
pub mod signal;
pub mod target;
pub mod world_map;

pub use error::ModelError;
pub use radar::Radar;
pub use signal::Signal;
pub use target::Target;
pub use world_map::WorldMap;
