//! Game state and core rule types
//!
//! Everything a session mutates and a presentation layer reads lives here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A platform's required step direction, or the player's facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Horizontal sign for layout math (-1 = left, 1 = right)
    #[inline]
    pub fn offset(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting steps
    Running,
    /// Run ended; only restart leaves this phase
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Stepped away from the next platform
    WrongStep,
    /// Step countdown reached zero
    TimeUp,
}

/// Outbound signals for a presentation layer to consume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    TimeRemaining { seconds: f64, fraction: f64 },
    GameOver { score: u32, cause: GameOverCause },
    Restarted,
}

/// Upcoming platform directions, front = next required step
///
/// Non-empty once prefilled; a successful step pops the front and the
/// generator appends one replacement, so the length stays constant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformQueue {
    directions: VecDeque<Direction>,
}

impl PlatformQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next platform's required direction
    pub fn front(&self) -> Option<Direction> {
        self.directions.front().copied()
    }

    pub fn push(&mut self, dir: Direction) {
        self.directions.push_back(dir);
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.directions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn clear(&mut self) {
        self.directions.clear();
    }

    /// Directions from nearest to farthest platform
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.directions.iter().copied()
    }
}

/// Complete rule state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Successful steps this session
    pub score: u32,
    pub phase: GamePhase,
    /// Direction the player is facing (and will step on a facing-relative step)
    pub facing: Direction,
    /// Sliding window of upcoming platforms
    pub queue: PlatformQueue,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: GamePhase::Running,
            facing: Direction::Right,
            queue: PlatformQueue::new(),
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
