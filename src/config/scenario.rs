// src/config/scenario.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub world_radius: f64,
    #[serde(default)]
    pub targets: Vec<TargetInstance>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TargetInstance {
    pub id: String,
    pub initial_position: [f64; 3],
    pub direction: [f64; 3],
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_without_targets() {
        let scenario: Scenario = serde_yaml::from_str("world_radius: 10.0").unwrap();

        assert_eq!(scenario.world_radius, 10.0);
        assert!(scenario.targets.is_empty());
    }
}
