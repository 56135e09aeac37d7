//! Session controller
//!
//! The only mutating entry points of the rule engine. Every mutation happens
//! synchronously inside one of these calls, and each call reports what
//! changed as `GameEvent`s for a presentation layer to consume. The session
//! owns no callbacks: the host drives `tick`, ended sessions ignore it, and
//! `restart` swaps timer state wholesale, so stale timer lineages cannot
//! double-decrement the countdown.

use rand::Rng;
use rand_pcg::Pcg32;

use super::platforms::PlatformGenerator;
use super::state::{Direction, GameEvent, GameOverCause, GamePhase, GameState};
use super::step::{StepOutcome, validate};
use super::timer::StepTimer;
use crate::consts::VISIBLE_PLATFORMS;
use crate::tuning::Tuning;

/// One play-through from initialization or restart to the next game over
pub struct Session<R = Pcg32> {
    state: GameState,
    timer: StepTimer,
    platforms: PlatformGenerator<R>,
}

impl Session<Pcg32> {
    /// New session with a reproducible platform sequence
    pub fn from_seed(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, PlatformGenerator::from_seed(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(tuning: Tuning, mut platforms: PlatformGenerator<R>) -> Self {
        let mut state = GameState::new();
        platforms.prefill(&mut state.queue, VISIBLE_PLATFORMS);
        Self {
            state,
            timer: StepTimer::new(tuning),
            platforms,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &StepTimer {
        &self.timer
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn facing(&self) -> Direction {
        self.state.facing
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Upcoming platform directions, nearest first
    pub fn upcoming(&self) -> impl Iterator<Item = Direction> + '_ {
        self.state.queue.iter()
    }

    /// Commit a facing and step in that direction.
    ///
    /// Success pops the consumed platform, draws one replacement (the queue
    /// length is invariant), bumps the score and grants a fresh allotment.
    /// A mismatch ends the run; the queue is left untouched.
    pub fn attempt_step(&mut self, direction: Direction) -> Vec<GameEvent> {
        if self.state.game_over() {
            return Vec::new();
        }
        self.state.facing = direction;
        let mut events = Vec::new();
        match validate(direction, &self.state.queue) {
            StepOutcome::Advance => {
                self.state.score += 1;
                self.state.queue.pop();
                let replacement = self.platforms.next_direction();
                self.state.queue.push(replacement);
                self.timer.reset_on_success();
                log::debug!(
                    "step {:?} ok: score {}, budget {:.2}",
                    direction,
                    self.state.score,
                    self.timer.budget()
                );
                events.push(GameEvent::ScoreChanged {
                    score: self.state.score,
                });
                events.push(self.time_event());
            }
            StepOutcome::Fall => {
                self.end_game(GameOverCause::WrongStep, &mut events);
            }
        }
        events
    }

    /// Step in the current facing direction (the plain "step" input)
    pub fn step(&mut self) -> Vec<GameEvent> {
        let facing = self.state.facing;
        self.attempt_step(facing)
    }

    /// Toggle the stored facing. Presentational only: no effect on queue,
    /// score or timer. Ignored once the run has ended.
    pub fn flip(&mut self) {
        if !self.state.game_over() {
            self.state.facing = self.state.facing.opposite();
        }
    }

    /// Advance the step countdown by `dt` seconds
    pub fn tick(&mut self, dt: f64) -> Vec<GameEvent> {
        if self.state.game_over() {
            return Vec::new();
        }
        let expired = self.timer.tick(dt);
        let mut events = vec![self.time_event()];
        if expired {
            self.end_game(GameOverCause::TimeUp, &mut events);
        }
        events
    }

    /// Back to a fresh session; the only exit from game over.
    ///
    /// Score, phase and facing reset, the queue is refilled from the
    /// generator, and the timer gets its full initial budget back.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.state = GameState::new();
        self.platforms
            .prefill(&mut self.state.queue, VISIBLE_PLATFORMS);
        self.timer.restart();
        log::info!("session restarted");
        vec![
            GameEvent::Restarted,
            GameEvent::ScoreChanged { score: 0 },
            self.time_event(),
        ]
    }

    fn time_event(&self) -> GameEvent {
        GameEvent::TimeRemaining {
            seconds: self.timer.remaining_display(),
            fraction: self.timer.fraction(),
        }
    }

    fn end_game(&mut self, cause: GameOverCause, events: &mut Vec<GameEvent>) {
        self.state.phase = GamePhase::GameOver;
        log::info!("game over: {:?} at score {}", cause, self.state.score);
        events.push(GameEvent::GameOver {
            score: self.state.score,
            cause,
        });
    }
}
