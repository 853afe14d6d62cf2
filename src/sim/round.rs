//! Round lifecycle
//!
//! A round ends the moment the ball drops fully below the field. The reset
//! that follows is immediate: there is no lost screen or serve phase.

use super::body::PhysicsWorld;
use super::state::{Ball, Field, GameState};

/// Ball has fallen out through the bottom edge
#[inline]
pub fn is_out_of_play(ball: &Ball, field: &Field) -> bool {
    ball.pos.y > field.height + ball.radius
}

/// Reset ball, paddle and world if the ball has left play
///
/// Returns true iff a reset happened. The world is cleared and repopulated
/// in the same call, so callers never observe a half-reset state.
pub fn check_and_maybe_reset(state: &mut GameState, world: &mut impl PhysicsWorld) -> bool {
    if !is_out_of_play(&state.ball, &state.field) {
        return false;
    }

    log::info!(
        "Round {} over after {} paddle hits, resetting",
        state.round,
        state.round_hits
    );
    state.respawn(world);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::EulerWorld;
    use glam::Vec2;

    fn setup() -> (GameState, EulerWorld) {
        let mut world = EulerWorld::default();
        let state = GameState::new(Field::new(640.0, 480.0), &Settings::default(), &mut world);
        (state, world)
    }

    #[test]
    fn test_out_of_play_threshold() {
        let (mut state, _world) = setup();
        state.ball.pos = Vec2::new(320.0, 500.0); // exactly height + radius
        assert!(!is_out_of_play(&state.ball, &state.field));
        state.ball.pos.y = 500.1;
        assert!(is_out_of_play(&state.ball, &state.field));
    }

    #[test]
    fn test_no_reset_in_play() {
        let (mut state, mut world) = setup();
        state.ball.pos = Vec2::new(10.0, 479.0);
        state.ball.vel = Vec2::new(1.0, 2.0);

        assert!(!check_and_maybe_reset(&mut state, &mut world));
        assert_eq!(state.ball.pos, Vec2::new(10.0, 479.0));
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_reset_restores_spawn_pose() {
        let (mut state, mut world) = setup();
        state.ball.pos = Vec2::new(100.0, 600.0);
        state.ball.vel = Vec2::new(-2.0, 12.0);
        state
            .paddle
            .set_control_points(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));

        assert!(check_and_maybe_reset(&mut state, &mut world));
        assert_eq!(state.ball.pos, Vec2::new(320.0, 240.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.paddle.points[0].pos, Vec2::new(270.0, 240.0));
        assert_eq!(state.paddle.points[1].pos, Vec2::new(370.0, 240.0));
        assert_eq!(world.body_count(), 3);
        assert_eq!(world.position(state.ball.body), Some(Vec2::new(320.0, 240.0)));
        assert_eq!(state.round, 2);

        // Same crossing does not reset twice
        assert!(!check_and_maybe_reset(&mut state, &mut world));
        assert_eq!(state.round, 2);
    }
}
