//! Level progression
//!
//! Reacts to score changes. A level applies when the score lands exactly on
//! its threshold; a score that jumps past a threshold within one tick skips
//! that level.

use super::state::{Game, GameEvent, GameState};
use crate::settings::LevelTable;

/// Remembers the last score progression reacted to, so re-checking an
/// unchanged score never applies a level twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelProgress {
    observed_score: Option<u64>,
}

impl LevelProgress {
    /// Apply every level whose threshold equals the current score, if the
    /// score changed since the last call. Returns the names applied.
    pub fn update(&mut self, game: &mut Game, table: &LevelTable) -> Vec<String> {
        if self.observed_score == Some(game.score) {
            return Vec::new();
        }
        self.observed_score = Some(game.score);

        let mut applied = Vec::new();
        for level in table.levels_at(game.score) {
            game.setting = game.setting.increased_by(&level.increment);
            applied.push(level.threshold.name.clone());
        }
        applied
    }
}

/// Run progression against the state's own table and record level-ups
pub fn apply_level_progression(state: &mut GameState) {
    let GameState {
        game,
        levels,
        progress,
        events,
        ..
    } = state;

    for name in progress.update(game, levels) {
        log::info!(
            "Level up: {} at score {} (weapon speed {}, target speed {})",
            name,
            game.score,
            game.setting.weapon_speed,
            game.setting.target_speed
        );
        events.push(GameEvent::LevelUp { name });
    }
}
