//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{HitOutcome, collides, resolve_collisions, resolve_hit};
pub use progression::{LevelProgress, apply_level_progression};
pub use spawn::{SpawnRequest, SpawnTimer, Spawner, choose_target_kind};
pub use state::{
    Field, Game, GameEvent, GameState, GameStatus, Launcher, MoveDirection, Target, TargetColor,
    TargetKind, Weapon,
};
pub use tick::{TickInput, tick};
