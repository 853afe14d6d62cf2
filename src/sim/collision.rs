//! Collision detection and response for the paddle segment
//!
//! The paddle is a thick line segment between two fingertips. A hit needs
//! the ball's projection to land inside the finite segment and the ball
//! center to sit within the contact radius of that projection.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Paddle, Segment};
use crate::consts::DEGENERATE_SEGMENT_EPSILON;
use crate::settings::BounceParams;

/// Where a ball touches the paddle segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Scalar projection of the ball onto the segment, in [0, len]
    pub projection: f32,
    /// Closest point on the segment
    pub point: Vec2,
    /// Perpendicular distance from ball center to `point`
    pub distance: f32,
}

/// Test a ball center against a thick segment
///
/// Returns `None` for a degenerate segment, a projection outside the
/// segment, or a ball farther than `contact_radius` from it.
pub fn segment_contact(ball_pos: Vec2, segment: &Segment, contact_radius: f32) -> Option<Contact> {
    let line_vec = segment.direction();
    let ball_vec = ball_pos - segment.start;
    let line_len = line_vec.length();

    if line_len <= DEGENERATE_SEGMENT_EPSILON {
        return None; // Degenerate segment
    }

    let projection = ball_vec.dot(line_vec) / line_len;
    if !(0.0..=line_len).contains(&projection) {
        return None;
    }

    let point = segment.start + line_vec * (projection / line_len);
    let distance = ball_pos.distance(point);

    (distance <= contact_radius).then_some(Contact {
        projection,
        point,
        distance,
    })
}

/// Velocity after a paddle hit
///
/// Always kicks the ball upward: the vertical speed is boosted and forced
/// negative whatever its incoming sign. The horizontal component keeps its
/// value plus `jitter`.
#[inline]
pub fn bounce_velocity(vel: Vec2, jitter: f32, boost: f32) -> Vec2 {
    Vec2::new(vel.x + jitter, -vel.y.abs() * boost)
}

/// Bounce the ball off the paddle if they touch
///
/// Returns true iff a bounce was applied.
pub fn test_and_resolve<R: Rng>(
    ball: &mut Ball,
    paddle: &Paddle,
    bounce: &BounceParams,
    rng: &mut R,
) -> bool {
    let Some(contact) = segment_contact(ball.pos, &paddle.segment(), paddle.contact_radius())
    else {
        return false;
    };

    let jitter = rng.random_range(-bounce.jitter..=bounce.jitter);
    ball.vel = bounce_velocity(ball.vel, jitter, bounce.boost);
    log::debug!(
        "Paddle hit at {:?} (d={:.1}), vel -> {:?}",
        contact.point,
        contact.distance,
        ball.vel
    );
    true
}
