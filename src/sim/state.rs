//! Game state and core simulation types
//!
//! `GameState` is the single owner of every entity collection. The loop
//! driver mutates it only through `tick`, `start`, `restart` and `resize`;
//! the presentation layer reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::progression::LevelProgress;
use super::spawn::{SpawnRequest, Spawner};
use crate::consts::*;
use crate::error::LifecycleError;
use crate::sanitize_dimension;
use crate::settings::{GameSettings, LevelTable};

/// Lifecycle status: Idle -> Started -> Over -> Started ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Before the first start; never re-entered
    #[default]
    Idle,
    Started,
    Over,
}

/// Score, status and current speed snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Game {
    pub score: u64,
    pub status: GameStatus,
    pub setting: GameSettings,
}

impl Game {
    pub fn with_settings(setting: GameSettings) -> Self {
        Self {
            score: 0,
            status: GameStatus::Idle,
            setting,
        }
    }
}

/// Play field dimensions supplied by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    /// Largest integer spawn column
    pub fn max_column(&self) -> u32 {
        self.width.floor() as u32
    }
}

/// Drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDirection {
    #[default]
    None,
    Left,
    Right,
}

/// The player character; `x` is the left edge of its sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Launcher {
    pub x: f32,
    pub direction: MoveDirection,
}

impl Launcher {
    /// Launcher centred horizontally in the field
    pub fn centered(field: &Field) -> Self {
        Self {
            x: field.width / 2.0 - LAUNCHER_WIDTH / 2.0,
            direction: MoveDirection::None,
        }
    }

    /// Horizontal position projectiles leave from
    pub fn muzzle_x(&self) -> f32 {
        self.x + LAUNCHER_WIDTH / 2.0
    }

    /// Whether a drag gesture is active (running sprite)
    pub fn is_running(&self) -> bool {
        self.direction != MoveDirection::None
    }

    /// Take one step in the current direction.
    ///
    /// The launcher may hang half its width past either edge. A step that
    /// would cross that limit is skipped entirely rather than clamped.
    pub fn step(&mut self, speed: f32, field: &Field) {
        let half = LAUNCHER_WIDTH / 2.0;
        match self.direction {
            MoveDirection::None => {}
            MoveDirection::Left => {
                if self.x - speed >= -half {
                    self.x -= speed;
                }
            }
            MoveDirection::Right => {
                if self.x + speed + LAUNCHER_WIDTH <= field.width + half {
                    self.x += speed;
                }
            }
        }
    }
}

/// A projectile; moves vertically only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick, negative is upward
    pub vertical_speed: f32,
}

impl Weapon {
    pub fn new(id: u32, x: f32, y: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            radius: WEAPON_RADIUS,
            vertical_speed: -speed,
        }
    }

    /// Entirely above the top edge of the field
    pub fn is_off_field(&self) -> bool {
        self.pos.y + self.radius < 0.0
    }
}

/// Target toughness. Lives count the extra hits an armoured target absorbs
/// before the killing blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Easy,
    Medium { lives: u8 },
    Strong { lives: u8 },
}

impl TargetKind {
    pub const MEDIUM_LIVES: u8 = 2;
    pub const STRONG_LIVES: u8 = 3;

    pub fn medium() -> Self {
        TargetKind::Medium {
            lives: Self::MEDIUM_LIVES,
        }
    }

    pub fn strong() -> Self {
        TargetKind::Strong {
            lives: Self::STRONG_LIVES,
        }
    }

    pub fn lives(&self) -> Option<u8> {
        match *self {
            TargetKind::Easy => None,
            TargetKind::Medium { lives } | TargetKind::Strong { lives } => Some(lives),
        }
    }

    pub fn color(&self) -> TargetColor {
        match self {
            TargetKind::Easy => TargetColor::Green,
            TargetKind::Medium { .. } => TargetColor::Blue,
            TargetKind::Strong { .. } => TargetColor::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetKind::Easy => "easy",
            TargetKind::Medium { .. } => "medium",
            TargetKind::Strong { .. } => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetColor {
    Green,
    Blue,
    Red,
}

/// A falling target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick, positive is downward
    pub falling_speed: f32,
    pub kind: TargetKind,
}

impl Target {
    /// New target at the top edge of the field
    pub fn new(id: u32, x: f32, falling_speed: f32, kind: TargetKind) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            radius: TARGET_RADIUS,
            falling_speed,
            kind,
        }
    }

    pub fn color(&self) -> TargetColor {
        self.kind.color()
    }

    /// Copy of this target after absorbing a hit: bigger, one life fewer.
    /// Returns `None` when the hit destroys it.
    pub fn absorbed_hit(&self) -> Option<Target> {
        let kind = match self.kind {
            TargetKind::Easy => return None,
            TargetKind::Medium { lives: 0 } | TargetKind::Strong { lives: 0 } => return None,
            TargetKind::Medium { lives } => TargetKind::Medium { lives: lives - 1 },
            TargetKind::Strong { lives } => TargetKind::Strong { lives: lives - 1 },
        };
        Some(Target {
            radius: self.radius + TARGET_HIT_GROWTH,
            kind,
            ..self.clone()
        })
    }

    /// Below the bottom edge of the field
    pub fn is_past(&self, field: &Field) -> bool {
        self.pos.y > field.height
    }
}

/// Things that happened during the last tick (for presentation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WeaponFired { weapon_id: u32 },
    TargetSpawned { target_id: u32, kind: TargetKind },
    TargetHit { target_id: u32, lives_left: u8 },
    TargetDestroyed { target_id: u32, kind: TargetKind },
    LevelUp { name: String },
    GameOver { score: u64 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub game: Game,
    pub field: Field,
    pub launcher: Launcher,
    /// Active projectiles in spawn order
    pub weapons: Vec<Weapon>,
    /// Active targets in spawn order
    pub targets: Vec<Target>,
    /// Events recorded during the last tick
    pub events: Vec<GameEvent>,
    /// Ticks simulated while started
    pub time_ticks: u64,
    pub(crate) levels: LevelTable,
    pub(crate) progress: LevelProgress,
    pub(crate) spawner: Spawner,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create an idle game with the built-in level table
    pub fn new(seed: u64) -> Self {
        Self::with_levels(seed, LevelTable::default())
    }

    pub fn with_levels(seed: u64, levels: LevelTable) -> Self {
        Self {
            seed,
            game: Game::with_settings(levels.defaults()),
            field: Field::default(),
            launcher: Launcher::default(),
            weapons: Vec::new(),
            targets: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            levels,
            progress: LevelProgress::default(),
            spawner: Spawner::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// HUD level label for the current score
    pub fn level_name(&self) -> &str {
        self.levels.display_name(self.game.score)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply new screen dimensions. The launcher is recentred until the
    /// game has started.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Field::new(width, height);
        if self.game.status != GameStatus::Started {
            self.launcher = Launcher::centered(&self.field);
        }
    }

    /// Queue a spawn for the next tick
    pub fn request_spawn(&mut self, request: SpawnRequest) {
        self.spawner.enqueue(request);
    }

    /// Idle -> Started
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        if self.game.status != GameStatus::Idle {
            return Err(LifecycleError::CannotStart(self.game.status));
        }
        self.game.status = GameStatus::Started;
        self.spawner.reset();
        log::info!("Game started (seed {})", self.seed);
        Ok(())
    }

    /// Over -> Started, with score and settings back at their defaults
    pub fn restart(&mut self) -> Result<(), LifecycleError> {
        if self.game.status != GameStatus::Over {
            return Err(LifecycleError::CannotRestart(self.game.status));
        }
        self.clear_entities();
        self.game = Game {
            score: 0,
            status: GameStatus::Started,
            setting: self.levels.defaults(),
        };
        self.progress = LevelProgress::default();
        self.launcher = Launcher::centered(&self.field);
        log::info!("Game restarted");
        Ok(())
    }

    /// Started -> Over. Stops spawning and empties every collection.
    pub(crate) fn end_game(&mut self) {
        self.game.status = GameStatus::Over;
        self.launcher.direction = MoveDirection::None;
        self.clear_entities();
        self.events.push(GameEvent::GameOver {
            score: self.game.score,
        });
        log::info!("Game over with score {}", self.game.score);
    }

    fn clear_entities(&mut self) {
        self.weapons.clear();
        self.targets.clear();
        self.spawner.reset();
    }
}
