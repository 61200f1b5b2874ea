//! Ninja Runner - a falling-target arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, levels)
//! - `settings`: Speed settings and the level table
//! - `audio`: Sound-effect collaborator seam
//! - `error`: Error types

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, LogAudio, NullAudio, SoundEffect};
pub use error::{AudioError, ConfigError, LifecycleError};
pub use settings::{GameSettings, Level, LevelTable, LevelThreshold};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Launcher sprite frame size (pixels)
    pub const LAUNCHER_WIDTH: f32 = 253.0;
    pub const LAUNCHER_HEIGHT: f32 = 303.0;

    /// Projectile collision radius
    pub const WEAPON_RADIUS: f32 = 32.0;
    /// Initial target collision radius
    pub const TARGET_RADIUS: f32 = 40.0;
    /// Radius gained by an armoured target each time it absorbs a hit
    pub const TARGET_HIT_GROWTH: f32 = 10.0;
    /// Strong targets fall at a quarter of the current target speed
    pub const STRONG_SPEED_FACTOR: f32 = 0.25;
    /// Strong targets only appear right of this fraction of the field width
    pub const STRONG_ZONE: f32 = 0.75;

    /// Points awarded per destroyed target
    pub const KILL_SCORE: u64 = 5;

    pub const WEAPON_SPAWN_INTERVAL_MS: u32 = 150;
    pub const TARGET_SPAWN_INTERVAL_MS: u32 = 1500;
    pub const WEAPON_SPAWN_INTERVAL_TICKS: u32 = super::ms_to_ticks(WEAPON_SPAWN_INTERVAL_MS);
    pub const TARGET_SPAWN_INTERVAL_TICKS: u32 = super::ms_to_ticks(TARGET_SPAWN_INTERVAL_MS);
}

/// Convert a wall-clock interval to a whole number of ticks (at least one)
#[inline]
pub const fn ms_to_ticks(ms: u32) -> u32 {
    let ticks = (ms * consts::TICK_RATE_HZ).div_ceil(1000);
    if ticks == 0 { 1 } else { ticks }
}

/// Clamp an externally supplied dimension to a finite, non-negative value
#[inline]
pub fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
