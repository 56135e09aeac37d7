//! Platform layout derived from the direction queue
//!
//! Platforms move instead of the player, so positions are recomputed from
//! the queue after every step. The window is small; the cost is trivial.

use glam::Vec2;

use super::state::PlatformQueue;
use crate::consts::*;

/// Player anchor point; the figure never leaves it
pub fn player_anchor() -> Vec2 {
    Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - PLAYER_BASE_OFFSET)
}

/// Top-left corners of the visible platforms, nearest first.
///
/// The first platform sits directly beneath the player; each queued
/// direction offsets the next one sideways and one step up.
pub fn platform_positions(queue: &PlatformQueue) -> Vec<Vec2> {
    let anchor = player_anchor();
    let mut positions = Vec::with_capacity(queue.len() + 1);
    // Platform top just under the player's feet
    let mut current = Vec2::new(anchor.x - PLATFORM_WIDTH / 2.0, anchor.y + 20.0);
    positions.push(current);
    for dir in queue.iter() {
        current.x += PLATFORM_OFFSET * dir.offset();
        current.y -= STEP_HEIGHT;
        positions.push(current);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn queue_of(directions: &[Direction]) -> PlatformQueue {
        let mut queue = PlatformQueue::new();
        for &dir in directions {
            queue.push(dir);
        }
        queue
    }

    #[test]
    fn test_first_platform_under_player() {
        let positions = platform_positions(&PlatformQueue::new());
        assert_eq!(positions.len(), 1);
        let anchor = player_anchor();
        assert_eq!(positions[0].x, anchor.x - PLATFORM_WIDTH / 2.0);
        assert!(positions[0].y > anchor.y);
    }

    #[test]
    fn test_directions_drive_offsets() {
        let queue = queue_of(&[Direction::Right, Direction::Left]);
        let positions = platform_positions(&queue);
        assert_eq!(positions.len(), 3);

        let step_right = positions[1] - positions[0];
        assert_eq!(step_right.x, PLATFORM_OFFSET);
        assert_eq!(step_right.y, -STEP_HEIGHT);

        let step_left = positions[2] - positions[1];
        assert_eq!(step_left.x, -PLATFORM_OFFSET);
        assert_eq!(step_left.y, -STEP_HEIGHT);
    }

    #[test]
    fn test_one_position_per_queued_platform() {
        let queue = queue_of(&[Direction::Left; 11]);
        assert_eq!(platform_positions(&queue).len(), 12);
    }
}
