//! Speed settings and level progression table
//!
//! Settings are immutable snapshots: a level-up replaces them wholesale with
//! the sum of the current values and the level's increment.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Speeds in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Launcher horizontal speed
    pub ninja_speed: f32,
    /// Upward projectile speed (applied negated)
    pub weapon_speed: f32,
    /// Base falling speed of new targets
    pub target_speed: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            ninja_speed: 10.0,
            weapon_speed: 10.0,
            target_speed: 2.0,
        }
    }
}

impl GameSettings {
    pub const ZERO: Self = Self {
        ninja_speed: 0.0,
        weapon_speed: 0.0,
        target_speed: 0.0,
    };

    /// Add an increment, producing the next snapshot
    #[must_use]
    pub fn increased_by(&self, increment: &GameSettings) -> Self {
        Self {
            ninja_speed: self.ninja_speed + increment.ninja_speed,
            weapon_speed: self.weapon_speed + increment.weapon_speed,
            target_speed: self.target_speed + increment.target_speed,
        }
    }

    fn is_positive(&self) -> bool {
        self.ninja_speed > 0.0 && self.weapon_speed > 0.0 && self.target_speed > 0.0
    }

    fn is_non_negative(&self) -> bool {
        self.ninja_speed >= 0.0 && self.weapon_speed >= 0.0 && self.target_speed >= 0.0
    }
}

/// Score at which a level is reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelThreshold {
    pub score: u64,
    pub name: String,
}

/// A threshold and the speed increment applied when the score lands on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub threshold: LevelThreshold,
    pub increment: GameSettings,
}

impl Level {
    pub fn new(score: u64, name: &str, increment: GameSettings) -> Self {
        Self {
            threshold: LevelThreshold {
                score,
                name: name.to_string(),
            },
            increment,
        }
    }
}

/// Name shown once the score is past every threshold
pub const MAX_LEVEL_NAME: &str = "MAX";

/// Ordered level table, ascending by threshold score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTable {
    levels: Vec<Level>,
    /// Settings a new or restarted game begins with
    #[serde(default)]
    defaults: GameSettings,
}

impl Default for LevelTable {
    fn default() -> Self {
        let inc = |ninja_speed, weapon_speed, target_speed| GameSettings {
            ninja_speed,
            weapon_speed,
            target_speed,
        };
        Self {
            levels: vec![
                Level::new(20, "Rookie", inc(1.0, 2.0, 0.5)),
                Level::new(50, "Adept", inc(2.0, 2.0, 0.5)),
                Level::new(100, "Veteran", inc(2.0, 3.0, 1.0)),
                Level::new(200, "Master", inc(3.0, 4.0, 1.0)),
            ],
            defaults: GameSettings::default(),
        }
    }
}

impl LevelTable {
    /// Build a validated table
    pub fn new(levels: Vec<Level>, defaults: GameSettings) -> Result<Self, ConfigError> {
        let table = Self { levels, defaults };
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a table from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let table: LevelTable = serde_json::from_str(json)?;
        table.validate()?;
        log::info!("Loaded level table with {} levels", table.levels.len());
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if !self.defaults.is_positive() {
            return Err(ConfigError::NonPositiveSettings);
        }
        for pair in self.levels.windows(2) {
            let (previous, next) = (pair[0].threshold.score, pair[1].threshold.score);
            if next <= previous {
                return Err(ConfigError::NonIncreasingThreshold { previous, next });
            }
        }
        if let Some(level) = self.levels.iter().find(|l| !l.increment.is_non_negative()) {
            return Err(ConfigError::NegativeIncrement {
                name: level.threshold.name.clone(),
            });
        }
        Ok(())
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn defaults(&self) -> GameSettings {
        self.defaults
    }

    /// Levels whose threshold equals `score` exactly
    pub fn levels_at(&self, score: u64) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(move |l| l.threshold.score == score)
    }

    /// HUD label: the first level not yet passed, or "MAX"
    pub fn display_name(&self, score: u64) -> &str {
        self.levels
            .iter()
            .find(|l| l.threshold.score >= score)
            .map(|l| l.threshold.name.as_str())
            .unwrap_or(MAX_LEVEL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = LevelTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.levels().len(), 4);
        assert_eq!(table.defaults(), GameSettings::default());
    }

    #[test]
    fn test_increased_by_is_additive() {
        let base = GameSettings::default();
        let inc = GameSettings {
            ninja_speed: 1.0,
            weapon_speed: 2.0,
            target_speed: 0.5,
        };
        let next = base.increased_by(&inc);
        assert_eq!(next.ninja_speed, 11.0);
        assert_eq!(next.weapon_speed, 12.0);
        assert_eq!(next.target_speed, 2.5);
        assert_eq!(base.increased_by(&GameSettings::ZERO), base);
    }

    #[test]
    fn test_display_name() {
        let table = LevelTable::default();
        assert_eq!(table.display_name(0), "Rookie");
        assert_eq!(table.display_name(20), "Rookie");
        assert_eq!(table.display_name(25), "Adept");
        assert_eq!(table.display_name(200), "Master");
        assert_eq!(table.display_name(205), MAX_LEVEL_NAME);
    }

    #[test]
    fn test_levels_at_exact_match_only() {
        let table = LevelTable::default();
        assert_eq!(table.levels_at(50).count(), 1);
        assert_eq!(table.levels_at(49).count(), 0);
        assert_eq!(table.levels_at(51).count(), 0);
    }

    #[test]
    fn test_json_roundtrip_and_validation() {
        let table = LevelTable::default();
        let json = table.to_json().unwrap();
        let parsed = LevelTable::from_json(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_from_json_uses_default_settings_when_omitted() {
        let json = r#"{
            "levels": [
                { "threshold": { "score": 10, "name": "L2" },
                  "increment": { "ninja_speed": 1.0, "weapon_speed": 1.0, "target_speed": 1.0 } }
            ]
        }"#;
        let table = LevelTable::from_json(json).unwrap();
        assert_eq!(table.defaults(), GameSettings::default());
        assert_eq!(table.levels()[0].threshold.name, "L2");
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(matches!(
            LevelTable::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LevelTable::new(Vec::new(), GameSettings::default()),
            Err(ConfigError::EmptyTable)
        ));

        let inc = GameSettings::ZERO;
        let levels = vec![Level::new(20, "a", inc), Level::new(20, "b", inc)];
        assert!(matches!(
            LevelTable::new(levels, GameSettings::default()),
            Err(ConfigError::NonIncreasingThreshold { previous: 20, next: 20 })
        ));

        let negative = GameSettings {
            target_speed: -1.0,
            ..GameSettings::ZERO
        };
        assert!(matches!(
            LevelTable::new(vec![Level::new(5, "neg", negative)], GameSettings::default()),
            Err(ConfigError::NegativeIncrement { .. })
        ));
        assert!(matches!(
            LevelTable::new(vec![Level::new(5, "ok", inc)], GameSettings::ZERO),
            Err(ConfigError::NonPositiveSettings)
        ));
    }
}
