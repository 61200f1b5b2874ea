//! Ninja Runner headless driver
//!
//! Owns the game state and runs the fixed-timestep loop with a scripted
//! player, the way a platform shell would around the simulation.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ninja_runner::LogAudio;
    use ninja_runner::consts::*;
    use ninja_runner::sim::{GameState, GameStatus, MoveDirection, TickInput, tick};

    const FIELD_WIDTH: f32 = 1080.0;
    const FIELD_HEIGHT: f32 = 2340.0;
    /// Simulated render frame (slightly slower than the tick rate)
    const FRAME_DT: f32 = 1.0 / 50.0;
    const MAX_FRAMES: u32 = 50 * 180;
    const ROUNDS: u32 = 2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        audio: LogAudio,
        accumulator: f32,
        input: TickInput,
        rounds_finished: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let mut state = GameState::new(seed);
            state.resize(FIELD_WIDTH, FIELD_HEIGHT);
            Self {
                state,
                audio: LogAudio::new(1),
                accumulator: 0.0,
                input: TickInput {
                    start: true,
                    ..Default::default()
                },
                rounds_finished: 0,
            }
        }

        /// Steer toward the lowest target
        fn steer(&mut self) {
            let muzzle = self.state.launcher.muzzle_x();
            let lowest = self
                .state
                .targets
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

            self.input.direction = match lowest {
                Some(t) if t.pos.x < muzzle - 20.0 => MoveDirection::Left,
                Some(t) if t.pos.x > muzzle + 20.0 => MoveDirection::Right,
                _ => MoveDirection::None,
            };
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.steer();
                let was_started = self.state.status() == GameStatus::Started;
                tick(&mut self.state, &self.input, &mut self.audio);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.start = false;
                self.input.restart = false;

                if was_started && self.state.status() == GameStatus::Over {
                    self.rounds_finished += 1;
                    log::info!(
                        "Round {} over: score {} ({} ticks)",
                        self.rounds_finished,
                        self.state.game.score,
                        self.state.time_ticks
                    );
                    self.input.restart = self.rounds_finished < ROUNDS;
                }
            }
        }
    }

    pub fn run() {
        let seed = 0x5eed;
        let mut game = Game::new(seed);
        log::info!(
            "Field {}x{}, level table has {} levels",
            FIELD_WIDTH,
            FIELD_HEIGHT,
            game.state.levels().levels().len()
        );

        for _ in 0..MAX_FRAMES {
            game.update(FRAME_DT);
            if game.rounds_finished >= ROUNDS {
                break;
            }
        }

        println!(
            "status={:?} score={} level={} sounds={} targets={} weapons={}",
            game.state.status(),
            game.state.game.score,
            game.state.level_name(),
            game.audio.played,
            game.state.targets.len(),
            game.state.weapons.len()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ninja Runner (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the embedding page on wasm
}
