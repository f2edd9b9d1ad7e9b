// src/math/vector3.rs

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::math::error::MathError;

/// 3次元ベクトル（値型）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn max_abs_component(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// 最大成分で割ってから計算するため、大きな成分でもオーバーフローしない
    pub fn length(self) -> f64 {
        let m = self.max_abs_component();
        if m == 0.0 || !self.is_finite() {
            return (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt();
        }
        m * ((self.x / m).powi(2) + (self.y / m).powi(2) + (self.z / m).powi(2)).sqrt()
    }

    /// 単位ベクトルを返す
    ///
    /// # 戻り値
    /// - 正規化されたベクトル
    /// - 長さがゼロ、または成分が有限でない場合は`MathError::DegenerateVector`
    pub fn normalize(self) -> Result<Vector3, MathError> {
        if !self.is_finite() {
            return Err(MathError::DegenerateVector);
        }
        let m = self.max_abs_component();
        if m == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        let reduced = Vector3::new(self.x / m, self.y / m, self.z / m);
        let length = reduced.length();
        Ok(Vector3::new(
            reduced.x / length,
            reduced.y / length,
            reduced.z / length,
        ))
    }

    pub fn distance_to(self, other: Vector3) -> f64 {
        self.sub(other).length()
    }

    /// Z軸まわりの回転（XY平面内の走査）
    ///
    /// # 引数
    /// - `angle`: 回転角（度）。正の値で反時計回り
    ///
    /// # 戻り値
    /// - 回転後のベクトル（Z成分は変化しない）
    pub fn rotate_degrees(self, angle: f64) -> Vector3 {
        let (sin, cos) = angle.to_radians().sin_cos();
        Vector3::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::sub(self, other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, factor: f64) -> Vector3 {
        self.scale(factor)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
