//! Error types

use thiserror::Error;

use crate::sim::GameStatus;

/// Invalid level table or settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse level table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level table is empty")]
    EmptyTable,

    #[error("level thresholds must strictly increase: {previous} then {next}")]
    NonIncreasingThreshold { previous: u64, next: u64 },

    #[error("level '{name}' has a negative speed increment")]
    NegativeIncrement { name: String },

    #[error("default speed settings must be positive")]
    NonPositiveSettings,
}

/// A status transition the lifecycle does not permit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("cannot start a game from {0:?} (only from Idle)")]
    CannotStart(GameStatus),

    #[error("cannot restart a game from {0:?} (only from Over)")]
    CannotRestart(GameStatus),
}

/// Playback failure reported by an audio backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("no sound registered at index {0}")]
    UnknownSound(usize),

    #[error("audio backend unavailable: {0}")]
    Unavailable(String),
}
