// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RadarParameters {
    pub position: [f64; 3],          // レーダ位置
    pub pulse_direction: [f64; 3],   // 初期パルス方向
    pub speed: f64,                  // パルス速度（1ティックあたりの距離）
    pub rotation_step_degrees: f64,  // 1サイクルごとの回転角（度）
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchParameters {
    pub sweep_count: usize, // エピソード数
    #[serde(default = "default_hit_epsilon")]
    pub hit_epsilon: f64, // ヒット判定距離
    #[serde(default)]
    pub tick_delay_ms: u64, // ティックごとの待ち時間（ミリ秒、0で無効）
}

fn default_hit_epsilon() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_parameters_defaults() {
        let params: SearchParameters = serde_yaml::from_str("sweep_count: 3").unwrap();

        assert_eq!(params.sweep_count, 3);
        assert_eq!(params.hit_epsilon, 0.5);
        assert_eq!(params.tick_delay_ms, 0);
    }

    #[test]
    fn test_radar_parameters() {
        let yaml = "
position: [0.0, 0.0, 0.0]
pulse_direction: [1.0, 0.0, 0.0]
speed: 1.0
rotation_step_degrees: 1.0
";
        let params: RadarParameters = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(params.pulse_direction, [1.0, 0.0, 0.0]);
        assert_eq!(params.rotation_step_degrees, 1.0);
    }
}
