//! Periodic spawning of projectiles and targets
//!
//! Timers never touch the entity collections. When one fires it queues a
//! `SpawnRequest`; the tick drains the queue in one place, and only while the
//! game is started.

use std::collections::VecDeque;

use rand::Rng;

use super::state::{Field, GameEvent, GameState, GameStatus, Launcher, Target, TargetKind, Weapon};
use crate::consts::*;
use crate::settings::GameSettings;

/// What to create on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRequest {
    Weapon,
    Target,
}

/// Fires once every `interval` ticks, the first time after a full interval
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: u32,
    elapsed: u32,
}

impl SpawnTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
        }
    }

    /// Advance one tick; true when the timer fires
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Both spawn timers plus the pending request queue
#[derive(Debug, Clone)]
pub struct Spawner {
    weapon_timer: SpawnTimer,
    target_timer: SpawnTimer,
    queue: VecDeque<SpawnRequest>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            weapon_timer: SpawnTimer::new(WEAPON_SPAWN_INTERVAL_TICKS),
            target_timer: SpawnTimer::new(TARGET_SPAWN_INTERVAL_TICKS),
            queue: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, request: SpawnRequest) {
        self.queue.push_back(request);
    }

    /// Advance both timers one tick, queueing whatever fires
    pub fn poll(&mut self) {
        if self.weapon_timer.advance() {
            self.queue.push_back(SpawnRequest::Weapon);
        }
        if self.target_timer.advance() {
            self.queue.push_back(SpawnRequest::Target);
        }
    }

    /// Drop pending requests and restart both intervals
    pub fn reset(&mut self) {
        self.weapon_timer.reset();
        self.target_timer.reset();
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn take(&mut self) -> VecDeque<SpawnRequest> {
        std::mem::take(&mut self.queue)
    }
}

/// Variant policy for a target spawned in column `x`:
/// even columns are Medium, odd columns right of 3/4 width are Strong,
/// everything else is Easy.
pub fn choose_target_kind(x: u32, field_width: f32) -> TargetKind {
    if x % 2 == 0 {
        TargetKind::medium()
    } else if x as f32 > field_width * STRONG_ZONE {
        TargetKind::strong()
    } else {
        TargetKind::Easy
    }
}

/// Build a target for column `x` using the current speed snapshot
pub fn make_target(id: u32, x: u32, field: &Field, settings: &GameSettings) -> Target {
    let kind = choose_target_kind(x, field.width);
    let speed = match kind {
        TargetKind::Strong { .. } => settings.target_speed * STRONG_SPEED_FACTOR,
        TargetKind::Easy | TargetKind::Medium { .. } => settings.target_speed,
    };
    Target::new(id, x as f32, speed, kind)
}

/// Build a projectile at the launcher's muzzle
pub fn make_weapon(id: u32, launcher: &Launcher, field: &Field, settings: &GameSettings) -> Weapon {
    let y = field.height - LAUNCHER_HEIGHT * 2.0;
    Weapon::new(id, launcher.muzzle_x(), y, settings.weapon_speed)
}

/// Drain the spawn queue into the entity collections.
///
/// Requests are discarded unless the game is started.
pub fn process_spawn_queue(state: &mut GameState) {
    let pending = state.spawner.take();
    if state.game.status != GameStatus::Started {
        if !pending.is_empty() {
            log::debug!("Discarding {} spawn requests while {:?}", pending.len(), state.game.status);
        }
        return;
    }

    for request in pending {
        match request {
            SpawnRequest::Weapon => spawn_weapon(state),
            SpawnRequest::Target => spawn_target(state),
        }
    }
}

fn spawn_weapon(state: &mut GameState) {
    let id = state.next_entity_id();
    let weapon = make_weapon(id, &state.launcher, &state.field, &state.game.setting);
    state.events.push(GameEvent::WeaponFired { weapon_id: id });
    state.weapons.push(weapon);
}

fn spawn_target(state: &mut GameState) {
    let x = state.rng.random_range(0..=state.field.max_column());
    let id = state.next_entity_id();
    let target = make_target(id, x, &state.field, &state.game.setting);
    log::debug!(
        "Spawned {} target {} at x={} (speed {})",
        target.kind.name(),
        id,
        x,
        target.falling_speed
    );
    state.events.push(GameEvent::TargetSpawned {
        target_id: id,
        kind: target.kind,
    });
    state.targets.push(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_timer_fires_every_interval() {
        let mut timer = SpawnTimer::new(3);
        let fired: Vec<bool> = (0..7).map(|_| timer.advance()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
        timer.reset();
        assert!(!timer.advance());
    }

    #[test]
    fn test_variant_policy() {
        let width = 1000.0;
        assert_eq!(choose_target_kind(0, width), TargetKind::medium());
        assert_eq!(choose_target_kind(800, width), TargetKind::medium());
        assert_eq!(choose_target_kind(801, width), TargetKind::strong());
        assert_eq!(choose_target_kind(751, width), TargetKind::strong());
        // Exactly 3/4 is not strictly greater
        assert_eq!(choose_target_kind(750, 1000.0), TargetKind::medium());
        assert_eq!(choose_target_kind(3, 4.0), TargetKind::Easy);
        assert_eq!(choose_target_kind(749, width), TargetKind::Easy);
        assert_eq!(choose_target_kind(1, width), TargetKind::Easy);
    }

    #[test]
    fn test_strong_targets_fall_slower() {
        let field = Field::new(1000.0, 2000.0);
        let settings = GameSettings::default();
        let strong = make_target(1, 901, &field, &settings);
        assert_eq!(strong.falling_speed, settings.target_speed * 0.25);
        assert_eq!(strong.pos.y, 0.0);
        let medium = make_target(2, 900, &field, &settings);
        assert_eq!(medium.falling_speed, settings.target_speed);
        let easy = make_target(3, 101, &field, &settings);
        assert_eq!(easy.falling_speed, settings.target_speed);
        assert_eq!(easy.radius, TARGET_RADIUS);
    }

    #[test]
    fn test_weapon_spawn_position_and_speed() {
        let field = Field::new(1000.0, 2000.0);
        let launcher = Launcher::centered(&field);
        let settings = GameSettings::default();
        let weapon = make_weapon(7, &launcher, &field, &settings);
        assert_eq!(weapon.pos.x, 500.0);
        assert_eq!(weapon.pos.y, 2000.0 - 2.0 * LAUNCHER_HEIGHT);
        assert_eq!(weapon.vertical_speed, -settings.weapon_speed);
        assert_eq!(weapon.radius, WEAPON_RADIUS);
    }

    #[test]
    fn test_zero_width_field_spawns_at_origin() {
        let mut state = GameState::new(3);
        state.start().unwrap();
        state.request_spawn(SpawnRequest::Target);
        process_spawn_queue(&mut state);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].pos.x, 0.0);
        assert_eq!(state.targets[0].kind, TargetKind::medium());
    }

    #[test]
    fn test_queue_drained_in_order() {
        let mut state = GameState::new(3);
        state.resize(500.0, 1000.0);
        state.start().unwrap();
        state.request_spawn(SpawnRequest::Weapon);
        state.request_spawn(SpawnRequest::Target);
        state.request_spawn(SpawnRequest::Weapon);
        process_spawn_queue(&mut state);
        assert_eq!(state.weapons.len(), 2);
        assert_eq!(state.targets.len(), 1);
        assert!(state.weapons[0].id < state.targets[0].id);
        assert!(state.targets[0].id < state.weapons[1].id);
        assert!(state.spawner.is_empty());
    }

    #[test]
    fn test_requests_discarded_unless_started() {
        let mut state = GameState::new(3);
        state.resize(500.0, 1000.0);
        state.request_spawn(SpawnRequest::Weapon);
        state.request_spawn(SpawnRequest::Target);
        process_spawn_queue(&mut state);
        assert!(state.weapons.is_empty());
        assert!(state.targets.is_empty());
        assert!(state.spawner.is_empty());
    }

    proptest! {
        #[test]
        fn prop_spawn_column_within_field(seed in any::<u64>(), width in 0.0f32..4000.0) {
            let mut state = GameState::new(seed);
            state.resize(width, 1000.0);
            state.start().unwrap();
            for _ in 0..16 {
                state.request_spawn(SpawnRequest::Target);
            }
            process_spawn_queue(&mut state);
            prop_assert_eq!(state.targets.len(), 16);
            for target in &state.targets {
                prop_assert!(target.pos.x >= 0.0 && target.pos.x <= width.floor());
                prop_assert_eq!(target.pos.y, 0.0);
            }
        }

        #[test]
        fn prop_even_columns_are_medium(x in 0u32..10_000, width in 1.0f32..10_000.0) {
            let kind = choose_target_kind(x, width);
            if x % 2 == 0 {
                prop_assert_eq!(kind, TargetKind::medium());
            } else {
                prop_assert!(kind != TargetKind::medium());
            }
        }
    }
}
