// src/math/mod.rs

pub mod vector3;
pub mod error;

pub use vector3::Vector3;
pub use error::MathError;
