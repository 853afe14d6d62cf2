//! Play-field containment
//!
//! Velocity correction only: a ball overlapping an edge is turned back
//! toward the field and may still overlap for one frame. There is no bottom
//! wall; leaving through the bottom ends the round.

use super::state::{Ball, Field};

/// Point the ball's velocity back into the field on the left, right and top
/// edges. Returns true if any component was changed.
pub fn clamp(ball: &mut Ball, field: &Field) -> bool {
    let before = ball.vel;

    if ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + ball.radius > field.width {
        ball.vel.x = -ball.vel.x.abs();
    }

    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = ball.vel.y.abs();
    }

    ball.vel != before
}
