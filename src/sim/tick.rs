//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick: input, spawn timers, spawn queue, motion, collisions, culling,
//! termination, level progression.

use super::collision::resolve_collisions;
use super::motion::{advance_targets, advance_weapons, cull_off_field};
use super::progression::apply_level_progression;
use super::spawn::process_spawn_queue;
use super::state::{GameState, GameStatus, MoveDirection};
use crate::audio::AudioSink;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Current drag gesture (begin-left, begin-right, end)
    pub direction: MoveDirection,
    /// Start button on the ready screen
    pub start: bool,
    /// Play-again button on the game-over screen
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioSink) {
    state.events.clear();

    if input.start {
        if let Err(err) = state.start() {
            log::warn!("Ignoring start: {}", err);
        }
    }
    if input.restart {
        if let Err(err) = state.restart() {
            log::warn!("Ignoring restart: {}", err);
        }
    }

    if state.game.status != GameStatus::Started {
        // Nothing spawns, moves or scores outside a running game
        process_spawn_queue(state);
        return;
    }

    state.time_ticks += 1;

    state.launcher.direction = input.direction;
    state.launcher.step(state.game.setting.ninja_speed, &state.field);

    state.spawner.poll();
    process_spawn_queue(state);

    advance_targets(&mut state.targets);
    advance_weapons(&mut state.weapons);

    resolve_collisions(state, audio);

    let culled = cull_off_field(&mut state.weapons);
    if culled > 0 {
        log::debug!("Culled {} projectiles above the field", culled);
    }

    if state.targets.iter().any(|t| t.is_past(&state.field)) {
        state.end_game();
    }

    apply_level_progression(state);
}
