use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "arrowKeyHighScores";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Scoring
    pub power_up_chance: f64,
    pub combo_step: u32,
    pub time_attack_bonus: u32,

    // Survival
    pub survival_lives: u32,

    // Clock (milliseconds)
    pub tick_ms: u64,
    pub slow_tick_ms: u64,

    // Input
    pub swipe_deadzone: i32,
    pub swipe_feedback_ms: u64,

    // Persistence
    pub high_score_capacity: usize,
    pub storage_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            power_up_chance: 0.1,
            combo_step: 5,
            time_attack_bonus: 2,

            survival_lives: 3,

            tick_ms: 1000,
            slow_tick_ms: 1500,

            swipe_deadzone: 30,
            swipe_feedback_ms: 500,

            high_score_capacity: 5,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Parses a partial JSON override; absent fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json_str)?;
        Ok(config.sanitized())
    }

    // A zero combo step would divide by zero when computing the multiplier.
    fn sanitized(mut self) -> Self {
        self.combo_step = self.combo_step.max(1);
        self.power_up_chance = self.power_up_chance.clamp(0.0, 1.0);
        self.swipe_deadzone = self.swipe_deadzone.max(0);
        self
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    #[must_use]
    pub const fn slow_tick_interval(&self) -> Duration {
        Duration::from_millis(self.slow_tick_ms)
    }

    #[must_use]
    pub const fn swipe_feedback(&self) -> Duration {
        Duration::from_millis(self.swipe_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = GameConfig::load_from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.storage_key, "arrowKeyHighScores");
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{
            "power_up_chance": 0.5,
            "survival_lives": 5
        }"#;
        let config = GameConfig::load_from_json(json).unwrap();
        assert!((config.power_up_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.survival_lives, 5);
        // Others should be default
        assert_eq!(config.combo_step, 5);
        assert_eq!(config.tick_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(GameConfig::load_from_json("{ invalid json }").is_err());
    }

    #[test]
    fn test_load_config_edge_cases() {
        let json = r#"{
            "combo_step": 0,
            "power_up_chance": 3.0,
            "swipe_deadzone": -10
        }"#;
        let config = GameConfig::load_from_json(json).unwrap();
        assert_eq!(config.combo_step, 1);
        assert!((config.power_up_chance - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.swipe_deadzone, 0);
    }
}
