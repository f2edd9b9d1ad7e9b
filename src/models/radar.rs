// src/models/radar.rs

use crate::math::{MathError, Vector3};
use crate::models::error::ModelError;
use crate::models::signal::Signal;

/// レーダの構造体
///
/// 位置は固定で、探索サイクルの合間に `rotate` でパルス方向だけが変化する。
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    pub position: Vector3,
    pub pulse_direction: Vector3,    // 単位方向ベクトル
    pub rotation_step_degrees: f64,  // 1サイクルごとの回転角（度）
    pub speed: f64,                  // パルスの1ティックあたりの進行距離
}

impl Radar {
    /// レーダを生成する
    ///
    /// # 戻り値
    /// - パルス方向がゼロベクトルの場合は`ModelError::InvalidDirection`
    /// - 速度が正の有限値でない場合は`ModelError::InvalidSpeed`
    /// - 位置が有限でない場合は`ModelError::NonFinitePosition`
    /// - 回転角が有限でない場合は`ModelError::InvalidRotationStep`
    pub fn new(
        position: Vector3,
        pulse_direction: Vector3,
        speed: f64,
        rotation_step_degrees: f64,
    ) -> Result<Radar, ModelError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ModelError::InvalidSpeed(speed));
        }
        if !position.is_finite() {
            return Err(ModelError::NonFinitePosition(position));
        }
        if !rotation_step_degrees.is_finite() {
            return Err(ModelError::InvalidRotationStep(rotation_step_degrees));
        }
        let pulse_direction = pulse_direction.normalize().map_err(|e| match e {
            MathError::DegenerateVector => ModelError::InvalidDirection,
        })?;

        Ok(Radar {
            position,
            pulse_direction,
            rotation_step_degrees,
            speed,
        })
    }

    /// 現在のパルス方向に信号を放射する
    pub fn emit(&self) -> Result<Signal, MathError> {
        let direction = self.pulse_direction.normalize()?;
        Ok(Signal::new(self.position, direction, self.speed))
    }

    /// パルス方向を `rotation_step_degrees` だけ回転させる
    pub fn rotate(&mut self) {
        self.pulse_direction = self.pulse_direction.rotate_degrees(self.rotation_step_degrees);
        log::debug!("パルス方向を更新しました: {}", self.pulse_direction);
    }
}
