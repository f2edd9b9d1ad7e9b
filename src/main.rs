// src/main.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use radarsim::simulation::csv::*;
use radarsim::simulation::framework::*;
use radarsim::simulation::load_parameters::*;
use radarsim::simulation::{FixedDelay, SearchSummary};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // 設定ディレクトリ（第1引数で上書き可能）
    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config"));

    // 設定とシナリオの読み込み
    let radar_params = load_radar_parameters(config_dir.join("radar_parameters.yaml"))?;
    let search_params = load_search_parameters(config_dir.join("search_parameters.yaml"))?;
    let scenario = load_scenario(config_dir.join("scenario.yaml"))?;

    // エンティティの初期化
    let cycle = initialize_search_cycle(&radar_params, &search_params, &scenario)?;
    log::info!(
        "レーダ位置 {}, 初期パルス方向 {}, 回転角 {} 度, マップ半径 {}, ヒット判定距離 {}",
        cycle.radar().position,
        cycle.radar().pulse_direction,
        cycle.radar().rotation_step_degrees,
        cycle.world().radius(),
        cycle.settings().hit_epsilon
    );

    // 探索の実行
    let mut pacing = FixedDelay::new(Duration::from_millis(search_params.tick_delay_ms));
    let outcomes = cycle.run_with_observer(&mut pacing)?;

    // CSV出力
    let mut writer = setup_csv_output("output/search_results.csv")?;
    for outcome in &outcomes {
        writer.write_all(create_csv_row(outcome).as_bytes())?;
    }
    writer.flush()?;

    let summary = SearchSummary::from_outcomes(&outcomes);
    println!(
        "episodes: {}, hits: {}, misses: {}, timeouts: {}",
        outcomes.len(),
        summary.hits,
        summary.misses,
        summary.timeouts
    );

    Ok(())
}
