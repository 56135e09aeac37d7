//! Deterministic game-rule module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Host-driven time (no callbacks, no ambient clocks)
//! - No rendering or platform dependencies

pub mod layout;
pub mod platforms;
pub mod session;
pub mod state;
pub mod step;
pub mod timer;

pub use layout::{platform_positions, player_anchor};
pub use platforms::PlatformGenerator;
pub use session::Session;
pub use state::{Direction, GameEvent, GameOverCause, GamePhase, GameState, PlatformQueue};
pub use step::{StepOutcome, validate};
pub use timer::{StepTimer, TimerPhase, Urgency};
