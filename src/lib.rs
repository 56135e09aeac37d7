//! Step Up - a vertical platform-climbing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game rules (platform sequence, step validation, timer)
//! - `tuning`: Data-driven difficulty configuration
//! - `highscores`: Local top-10 leaderboard

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game geometry constants
pub mod consts {
    /// Logical canvas size the layout is derived from
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: f32 = 70.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    /// Horizontal distance between platform midpoints
    pub const PLATFORM_OFFSET: f32 = 70.0;

    /// Player sprite size
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Vertical rise per successful step
    pub const STEP_HEIGHT: f32 = 50.0;
    /// Player anchor height above the canvas bottom
    pub const PLAYER_BASE_OFFSET: f32 = 50.0;

    /// Upcoming platforms kept queued at all times, sized so the visible
    /// play area is always covered: (CANVAS_HEIGHT - PLAYER_BASE_OFFSET) / STEP_HEIGHT
    pub const VISIBLE_PLATFORMS: usize = 11;
}
