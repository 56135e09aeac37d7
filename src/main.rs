//! Step Up entry point
//!
//! Platform-specific initialization: a wasm-bindgen handle for the browser
//! host and a headless smoke run for native.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use step_up::sim::{Direction, GameEvent, Session, platform_positions};
    use step_up::{HighScores, Tuning};

    /// Game handle exported to the host page.
    ///
    /// The page owns all DOM listeners and the tick interval; it forwards
    /// inputs here and renders from the snapshot accessors. Each mutating
    /// call returns the produced event batch as a JSON array.
    #[wasm_bindgen]
    pub struct WebGame {
        session: Session,
        tuning: Tuning,
        highscores: HighScores,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let tuning = Tuning::load();
            let seed = js_sys::Date::now() as u64;
            log::info!("Step Up starting with seed {seed}");

            WebGame {
                session: Session::from_seed(tuning, seed),
                tuning,
                highscores: HighScores::load(),
            }
        }

        pub fn step_left(&mut self) -> String {
            let events = self.session.attempt_step(Direction::Left);
            self.finish(events)
        }

        pub fn step_right(&mut self) -> String {
            let events = self.session.attempt_step(Direction::Right);
            self.finish(events)
        }

        /// Step in the current facing direction
        pub fn step(&mut self) -> String {
            let events = self.session.step();
            self.finish(events)
        }

        pub fn flip(&mut self) {
            self.session.flip();
        }

        pub fn tick(&mut self, dt_ms: f64) -> String {
            let events = self.session.tick(dt_ms / 1000.0);
            self.finish(events)
        }

        pub fn restart(&mut self) -> String {
            let events = self.session.restart();
            self.finish(events)
        }

        pub fn score(&self) -> u32 {
            self.session.score()
        }

        pub fn game_over(&self) -> bool {
            self.session.game_over()
        }

        pub fn facing_right(&self) -> bool {
            self.session.facing() == Direction::Right
        }

        pub fn time_left(&self) -> f64 {
            self.session.timer().remaining_display()
        }

        pub fn time_fraction(&self) -> f64 {
            self.session.timer().fraction()
        }

        pub fn tick_interval_ms(&self) -> u32 {
            self.tuning.tick_interval_ms
        }

        pub fn top_score(&self) -> u32 {
            self.highscores.top_score().unwrap_or(0)
        }

        /// Interleaved x,y platform corner coordinates, nearest platform first
        pub fn platforms(&self) -> Vec<f32> {
            platform_positions(&self.session.state().queue)
                .into_iter()
                .flat_map(|p| [p.x, p.y])
                .collect()
        }

        pub fn highscores_json(&self) -> String {
            serde_json::to_string(&self.highscores).unwrap_or_else(|_| "{}".into())
        }
    }

    impl WebGame {
        /// Fold any game-over into the leaderboard, then serialize the batch
        fn finish(&mut self, events: Vec<GameEvent>) -> String {
            for event in &events {
                if let GameEvent::GameOver { score, .. } = event {
                    if self.highscores.record(*score, js_sys::Date::now()).is_some() {
                        self.highscores.save();
                    }
                }
            }
            serde_json::to_string(&events).unwrap_or_else(|_| "[]".into())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Step Up (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 for the playable version");

    autopilot_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts construct a WebGame handle; nothing to do here
}

/// Drive a session the way a perfect player would, then fall on purpose
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_run() {
    use step_up::Tuning;
    use step_up::sim::GameEvent;
    use step_up::sim::Session;

    let tuning = Tuning::default();
    let mut session = Session::from_seed(tuning, 2024);

    for _ in 0..300 {
        session.tick(tuning.tick_interval_secs());
        let next = session.upcoming().next().expect("queue is never empty");
        session.attempt_step(next);
        assert!(!session.game_over(), "autopilot should never fall");
    }
    assert_eq!(session.score(), 300);

    let next = session.upcoming().next().expect("queue is never empty");
    let events = session.attempt_step(next.opposite());
    assert!(session.game_over());
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    );

    println!(
        "✓ Autopilot climbed {} steps, final budget {:.2}s",
        session.score(),
        session.timer().budget()
    );
}
