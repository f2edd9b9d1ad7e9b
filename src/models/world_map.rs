// src/models/world_map.rs

use crate::math::Vector3;
use crate::models::error::ModelError;
use crate::models::target::Target;

/// 原点を中心とする球状の探索領域
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMap {
    radius: f64,
    targets: Vec<Target>,
}

impl WorldMap {
    /// # 戻り値
    /// - 半径が正の有限値でない場合は`ModelError::InvalidRadius`
    pub fn new(radius: f64) -> Result<WorldMap, ModelError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ModelError::InvalidRadius(radius));
        }
        Ok(WorldMap {
            radius,
            targets: Vec::new(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 追加順に並んだ目標
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// 位置が領域内（境界を含む）にあるか判定する
    pub fn contains(&self, position: Vector3) -> bool {
        position.distance_to(Vector3::ZERO) <= self.radius
    }

    /// 既定の識別子 (`target{index}`) で目標を追加する
    ///
    /// # 戻り値
    /// - 追加された目標のインデックス
    pub fn add_target(
        &mut self,
        position: Vector3,
        direction: Vector3,
        speed: f64,
    ) -> Result<usize, ModelError> {
        let id = format!("target{}", self.targets.len());
        self.add_target_with_id(id, position, direction, speed)
    }

    /// 目標を追加する
    ///
    /// 失敗した場合、マップは変更されない。
    ///
    /// # 引数
    /// - `id`: 目標の識別子
    /// - `position`: 初期位置（領域内であること）
    /// - `direction`: 進行方向
    /// - `speed`: 速度
    ///
    /// # 戻り値
    /// - 追加された目標のインデックス
    /// - 初期位置が領域外の場合は`ModelError::OutOfBounds`
    pub fn add_target_with_id(
        &mut self,
        id: impl Into<String>,
        position: Vector3,
        direction: Vector3,
        speed: f64,
    ) -> Result<usize, ModelError> {
        if !self.contains(position) {
            return Err(ModelError::OutOfBounds {
                position,
                radius: self.radius,
            });
        }
        let target = Target::new(id, position, direction, speed)?;
        self.targets.push(target);
        Ok(self.targets.len() - 1)
    }

    /// 全目標を追加順に `dt` ティック進める
    ///
    /// 領域外に出た目標もマップからは削除しない。
    pub fn advance_all(&mut self, dt: f64) {
        for target in &mut self.targets {
            target.position = target.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldMap {
        WorldMap::new(10.0).unwrap()
    }

    #[test]
    fn test_new_invalid_radius() {
        assert_eq!(WorldMap::new(0.0), Err(ModelError::InvalidRadius(0.0)));
        assert_eq!(WorldMap::new(-3.0), Err(ModelError::InvalidRadius(-3.0)));
        assert!(WorldMap::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_contains() {
        let map = world();

        assert!(map.contains(Vector3::ZERO));
        assert!(map.contains(Vector3::new(3.0, 4.0, 5.0)));
        assert!(map.contains(Vector3::new(-9.99, 0.0, 0.0)));
        assert!(!map.contains(Vector3::new(10.01, 0.0, 0.0)));
        assert!(!map.contains(Vector3::new(8.0, 8.0, 0.0)));
    }

    /// 境界上の点は領域内とみなす
    #[test]
    fn test_contains_boundary_inclusive() {
        let map = world();

        assert!(map.contains(Vector3::new(10.0, 0.0, 0.0)));
        assert!(map.contains(Vector3::new(0.0, -10.0, 0.0)));
        assert!(map.contains(Vector3::new(6.0, 8.0, 0.0)));
    }

    #[test]
    fn test_add_target() {
        let mut map = world();

        let first = map
            .add_target(Vector3::new(1.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 1.0)
            .unwrap();
        let second = map
            .add_target_with_id("bogey", Vector3::new(5.0, 0.0, 0.0), Vector3::new(5.0, 5.0, 0.0), 1.0)
            .unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(map.targets()[0].id, "target0");
        assert_eq!(map.targets()[1].id, "bogey");
    }

    /// 領域外の目標追加は失敗し、マップは変更されない
    #[test]
    fn test_add_target_out_of_bounds_is_atomic() {
        let mut map = world();
        map.add_target(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), 1.0)
            .unwrap();

        let position = Vector3::new(20.0, 0.0, 0.0);
        let result = map.add_target(position, Vector3::new(1.0, 0.0, 0.0), 1.0);

        assert_eq!(
            result,
            Err(ModelError::OutOfBounds {
                position,
                radius: 10.0
            })
        );
        assert_eq!(map.targets().len(), 1);
    }

    #[test]
    fn test_add_target_invalid_direction_is_atomic() {
        let mut map = world();
        let result = map.add_target(Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO, 1.0);

        assert_eq!(result, Err(ModelError::InvalidDirection));
        assert!(map.targets().is_empty());
    }

    #[test]
    fn test_advance_all() {
        let mut map = world();
        map.add_target(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 1.0)
            .unwrap();
        map.add_target(Vector3::new(9.5, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), 1.0)
            .unwrap();

        map.advance_all(1.0);

        assert_eq!(map.targets()[0].position, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(map.targets()[1].position, Vector3::new(10.5, 0.0, 0.0));
        // 領域外に出ても削除されない
        assert_eq!(map.targets().len(), 2);
        assert!(!map.contains(map.targets()[1].position));
    }
}
