// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("長さゼロ、または有限でないベクトルは正規化できません。")]
    DegenerateVector,
}
