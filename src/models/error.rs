// src/models/error.rs

use thiserror::Error;

use crate::math::{MathError, Vector3};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("方向ベクトルの長さがゼロ、または有限ではありません。")]
    InvalidDirection,
    #[error("位置 {position} はマップ半径 {radius} の範囲外です。")]
    OutOfBounds { position: Vector3, radius: f64 },
    #[error("位置が有限値ではありません: {0}")]
    NonFinitePosition(Vector3),
    #[error("回転角が不正です: {0}")]
    InvalidRotationStep(f64),
    #[error("速度が不正です: {0}")]
    InvalidSpeed(f64),
    #[error("マップ半径が不正です: {0}")]
    InvalidRadius(f64),
    #[error("ヒット判定距離が不正です: {0}")]
    InvalidHitEpsilon(f64),
    #[error(transparent)]
    Math(#[from] MathError),
}
