//! Fixed-order simulation tick
//!
//! One call per rendered frame. The order of the steps is part of the game
//! feel: collision runs before containment so a bounce can never leave the
//! ball pointed out of the field, and a reset short-circuits integration.

use super::body::PhysicsWorld;
use super::state::GameState;
use super::{bounds, collision, round};
use crate::pose::PoseSample;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A pose sample was applied to the paddle
    pub paddle_moved: bool,
    /// The ball bounced off the paddle
    pub bounced: bool,
    /// A side or top edge turned the ball around
    pub wall_corrected: bool,
    /// The ball left play and everything was respawned
    pub reset: bool,
}

/// Advance the game by one frame
///
/// `pose` is the latest tracker sample, or `None` when no hand was seen, in
/// which case the paddle keeps its last pose.
pub fn tick(
    state: &mut GameState,
    world: &mut impl PhysicsWorld,
    pose: Option<&PoseSample>,
) -> TickReport {
    let mut report = TickReport::default();

    // 1. Paddle follows the hand
    if let Some(sample) = pose {
        report.paddle_moved = state
            .paddle
            .set_control_points(sample.thumb_tip, sample.index_tip);
        if report.paddle_moved {
            state.paddle.sync_bodies(world);
        }
    }

    // 2. Paddle hit
    let GameState {
        ball,
        paddle,
        bounce,
        rng,
        ..
    } = &mut *state;
    report.bounced = collision::test_and_resolve(ball, paddle, bounce, rng);
    if report.bounced {
        state.round_hits += 1;
    }

    // 3. Side and top walls
    report.wall_corrected = bounds::clamp(&mut state.ball, &state.field);

    // 4. Bottom exit
    if round::check_and_maybe_reset(state, world) {
        report.reset = true;
        state.time_ticks += 1;
        return report;
    }

    // 5. Integrate
    world.set_position(state.ball.body, state.ball.pos);
    world.set_velocity(state.ball.body, state.ball.vel);
    world.step();
    if let (Some(pos), Some(vel)) = (
        world.position(state.ball.body),
        world.velocity(state.ball.body),
    ) {
        state.ball.pos = pos;
        state.ball.vel = vel;
    }

    state.time_ticks += 1;
    report
}
