//! Projectile/target collision detection and resolution
//!
//! Each projectile resolves at most one hit per tick: the first colliding
//! target in collection order wins.

use super::state::{GameEvent, GameState, Target, TargetKind, Weapon};
use crate::audio::{self, AudioSink, SoundEffect};
use crate::consts::KILL_SCORE;

/// Circles overlap when their centres are strictly closer than the sum of
/// their radii. Touching is not a hit.
#[inline]
pub fn collides(weapon: &Weapon, target: &Target) -> bool {
    weapon.pos.distance(target.pos) < weapon.radius + target.radius
}

/// What a single hit did to a target
#[derive(Debug, Clone, PartialEq)]
pub enum HitOutcome {
    /// Armoured target survived; carries its replacement
    Absorbed(Target),
    /// Target is gone and scores
    Destroyed,
}

/// Decide the outcome of one hit on `target`
pub fn resolve_hit(target: &Target) -> HitOutcome {
    match target.kind {
        TargetKind::Easy => HitOutcome::Destroyed,
        TargetKind::Medium { .. } | TargetKind::Strong { .. } => match target.absorbed_hit() {
            Some(survivor) => HitOutcome::Absorbed(survivor),
            None => HitOutcome::Destroyed,
        },
    }
}

/// Resolve all projectile/target overlaps for this tick.
///
/// Every projectile that hits something is consumed. Returns the number of
/// targets destroyed.
pub fn resolve_collisions(state: &mut GameState, audio: &mut dyn AudioSink) -> u32 {
    let mut destroyed = 0;
    let mut i = 0;

    while i < state.weapons.len() {
        let weapon = &state.weapons[i];
        let Some(j) = state.targets.iter().position(|t| collides(weapon, t)) else {
            i += 1;
            continue;
        };

        audio::play(audio, SoundEffect::Hit);
        state.weapons.remove(i);

        match resolve_hit(&state.targets[j]) {
            HitOutcome::Absorbed(survivor) => {
                let lives_left = survivor.kind.lives().unwrap_or(0);
                log::debug!("Target {} absorbed a hit ({} lives left)", survivor.id, lives_left);
                state.events.push(GameEvent::TargetHit {
                    target_id: survivor.id,
                    lives_left,
                });
                state.targets[j] = survivor;
            }
            HitOutcome::Destroyed => {
                let target = state.targets.remove(j);
                state.game.score += KILL_SCORE;
                destroyed += 1;
                log::debug!(
                    "Destroyed {} target {} (score {})",
                    target.kind.name(),
                    target.id,
                    state.game.score
                );
                state.events.push(GameEvent::TargetDestroyed {
                    target_id: target.id,
                    kind: target.kind,
                });
            }
        }
    }

    destroyed
}
