// src/models/target.rs

use crate::math::{MathError, Vector3};
use crate::models::error::ModelError;

/// 移動目標の構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: String,
    pub position: Vector3,  // [x, y, z] 座標
    pub direction: Vector3, // 単位方向ベクトル
    pub speed: f64,         // 1ティックあたりの移動距離
}

impl Target {
    /// 目標を生成する
    ///
    /// # 引数
    /// - `id`: 目標の識別子
    /// - `position`: 初期位置
    /// - `direction`: 進行方向（正規化して保持する）
    /// - `speed`: 速度（0以上）
    ///
    /// # 戻り値
    /// - 生成された目標
    /// - 方向がゼロベクトルの場合は`ModelError::InvalidDirection`
    /// - 速度が負または有限でない場合は`ModelError::InvalidSpeed`
    /// - 位置が有限でない場合は`ModelError::NonFinitePosition`
    pub fn new(
        id: impl Into<String>,
        position: Vector3,
        direction: Vector3,
        speed: f64,
    ) -> Result<Target, ModelError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ModelError::InvalidSpeed(speed));
        }
        if !position.is_finite() {
            return Err(ModelError::NonFinitePosition(position));
        }
        let direction = direction.normalize().map_err(|e| match e {
            MathError::DegenerateVector => ModelError::InvalidDirection,
        })?;

        Ok(Target {
            id: id.into(),
            position,
            direction,
            speed,
        })
    }

    /// `dt` ティック後の位置を返す純粋関数
    pub fn advance(&self, dt: f64) -> Vector3 {
        self.position + self.direction * (self.speed * dt)
    }
}
