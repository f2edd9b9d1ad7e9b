// src/models/signal.rs

use crate::math::Vector3;

/// レーダから放射されたパルス
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub position: Vector3,
    pub direction: Vector3, // 単位方向ベクトル
    pub speed: f64,         // 1ティックあたりの進行距離
}

impl Signal {
    pub fn new(position: Vector3, direction: Vector3, speed: f64) -> Self {
        Signal {
            position,
            direction,
            speed,
        }
    }

    /// パルスを1ティック進める
    pub fn step(&mut self) {
        self.position = self.position + self.direction * self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_step() {
        let mut signal = Signal::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0), 1.5);

        signal.step();
        assert_eq!(signal.position, Vector3::new(1.5, 0.0, 0.0));

        signal.step();
        assert_eq!(signal.position, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(signal.direction, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_step_diagonal() {
        let direction = Vector3::new(1.0, 1.0, 0.0).normalize().unwrap();
        let mut signal = Signal::new(Vector3::new(1.0, 1.0, 1.0), direction, 2.0);

        for _ in 0..3 {
            signal.step();
        }

        assert_abs_diff_eq!(signal.position.distance_to(Vector3::new(1.0, 1.0, 1.0)), 6.0, epsilon = 1e-12);
        assert_eq!(signal.position.z, 1.0);
    }
}
