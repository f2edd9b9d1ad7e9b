// src/simulation/framework.rs

use crate::config::parameters::{RadarParameters, SearchParameters};
use crate::config::scenario::Scenario;
use crate::math::Vector3;
use crate::models::{ModelError, Radar, WorldMap};
use crate::simulation::search_cycle::{SearchCycle, SearchSettings};

/// 設定から探索サイクルを初期化する
///
/// # 引数
/// - `radar_params`: レーダパラメータ
/// - `search_params`: 探索パラメータ
/// - `scenario`: マップ半径と目標の初期配置
///
/// # 戻り値
/// - 初期化された探索サイクル
/// - 目標の配置やレーダの設定が不正な場合は`ModelError`
pub fn initialize_search_cycle(
    radar_params: &RadarParameters,
    search_params: &SearchParameters,
    scenario: &Scenario,
) -> Result<SearchCycle, ModelError> {
    // マップと目標の初期化
    let mut world = WorldMap::new(scenario.world_radius)?;
    for target in &scenario.targets {
        world.add_target_with_id(
            target.id.clone(),
            Vector3::from(target.initial_position),
            Vector3::from(target.direction),
            target.speed,
        )?;
    }

    // レーダの初期化
    let radar = Radar::new(
        Vector3::from(radar_params.position),
        Vector3::from(radar_params.pulse_direction),
        radar_params.speed,
        radar_params.rotation_step_degrees,
    )?;

    let settings = SearchSettings {
        sweep_count: search_params.sweep_count,
        hit_epsilon: search_params.hit_epsilon,
    };

    SearchCycle::new(radar, world, settings)
}
