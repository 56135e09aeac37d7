//! Step validation
//!
//! A step succeeds iff the committed direction matches the queue front.
//! Pure; the caller pops and refills the queue on success.

use super::state::{Direction, PlatformQueue};

/// Result of validating one committed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Committed direction matches the next platform
    Advance,
    /// Mismatch; the player falls and the run ends
    Fall,
}

/// Compare a committed step direction against the next required platform.
///
/// The queue is never empty while a session runs; an empty queue here is an
/// invariant violation, not a game state.
pub fn validate(committed: Direction, queue: &PlatformQueue) -> StepOutcome {
    let required = queue.front().expect("platform queue exhausted");
    if committed == required {
        StepOutcome::Advance
    } else {
        StepOutcome::Fall
    }
}
