//! Host-facing game facade
//!
//! Owns everything a frame needs: the physics world, the simulation state
//! and the pose mailbox. The host forwards tracker results into
//! [`Game::on_hand_keypoints`] (or [`Game::on_pose_sample`]) whenever they
//! arrive and calls [`Game::update`] once per rendered frame. Both calls must
//! come from the same event loop; nothing here is shared across threads.

use glam::Vec2;

use crate::error::{ConfigError, PoseError};
use crate::pose::{PoseMailbox, PoseSample};
use crate::scene::Scene;
use crate::settings::Settings;
use crate::sim::{Ball, EulerWorld, Field, GameState, Paddle, PhysicsWorld, TickReport, tick};

/// A running session
#[derive(Debug, Clone)]
pub struct Game<W: PhysicsWorld = EulerWorld> {
    state: GameState,
    world: W,
    mailbox: PoseMailbox,
    mirror_input: bool,
}

impl Game<EulerWorld> {
    /// Start a session on `field` with the built-in integrator
    ///
    /// `field` overrides `settings.field_width`/`field_height`; pass
    /// `settings.field()` to use the configured size.
    pub fn initialize(field: Field, settings: &Settings) -> Result<Self, ConfigError> {
        let world = EulerWorld::new(Vec2::new(0.0, settings.gravity), settings.air_friction);
        Self::with_world(world, field, settings)
    }
}

impl<W: PhysicsWorld> Game<W> {
    /// Start a session on a caller-provided physics world
    ///
    /// Fails if the settings or the field would break the simulation.
    pub fn with_world(mut world: W, field: Field, settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        field.validate()?;
        world.clear();
        let state = GameState::new(field, settings, &mut world);
        log::info!(
            "Game initialized: field {}x{}, seed {}",
            field.width,
            field.height,
            settings.seed
        );
        Ok(Self {
            state,
            world,
            mailbox: PoseMailbox::new(),
            mirror_input: settings.mirror_input,
        })
    }

    /// Deliver a fingertip pair from the tracker
    ///
    /// Invalid samples are dropped and the paddle keeps its last pose.
    pub fn on_pose_sample(&mut self, thumb_tip: Vec2, index_tip: Vec2) -> Result<(), PoseError> {
        let sample = PoseSample::new(thumb_tip, index_tip).inspect_err(|e| {
            log::warn!("Dropping pose sample: {e}");
        })?;
        self.post(sample);
        Ok(())
    }

    /// Deliver a raw tracker result: one keypoint list per detected hand
    ///
    /// Only the first hand is used. An empty result means no update this
    /// frame, and supersedes any sample still pending.
    pub fn on_hand_keypoints(&mut self, hands: &[Vec<Vec2>]) -> Result<(), PoseError> {
        let Some(keypoints) = hands.first() else {
            self.mailbox.clear();
            return Ok(());
        };
        let sample = PoseSample::from_keypoints(keypoints).inspect_err(|e| {
            log::warn!("Dropping hand keypoints: {e}");
        })?;
        self.post(sample);
        Ok(())
    }

    fn post(&mut self, sample: PoseSample) {
        let sample = if self.mirror_input {
            sample.mirrored(self.state.field.width)
        } else {
            sample
        };
        self.mailbox.post(sample);
    }

    /// Run one frame
    pub fn update(&mut self) -> TickReport {
        // Snapshot before anything mutates; later posts land next frame
        let pose = self.mailbox.take();
        tick(&mut self.state, &mut self.world, pose.as_ref())
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn field(&self) -> &Field {
        &self.state.field
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Everything a renderer needs for this frame
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BounceParams;

    /// Integrator stand-in that records calls and never moves anything
    #[derive(Debug, Default)]
    struct FrozenWorld {
        inner: EulerWorld,
        steps: usize,
        clears: usize,
    }

    impl PhysicsWorld for FrozenWorld {
        fn add_body(
            &mut self,
            kind: crate::sim::BodyKind,
            pos: Vec2,
            radius: f32,
        ) -> crate::sim::BodyHandle {
            self.inner.add_body(kind, pos, radius)
        }
        fn set_position(&mut self, body: crate::sim::BodyHandle, pos: Vec2) {
            self.inner.set_position(body, pos)
        }
        fn set_velocity(&mut self, body: crate::sim::BodyHandle, vel: Vec2) {
            self.inner.set_velocity(body, vel)
        }
        fn position(&self, body: crate::sim::BodyHandle) -> Option<Vec2> {
            self.inner.position(body)
        }
        fn velocity(&self, body: crate::sim::BodyHandle) -> Option<Vec2> {
            self.inner.velocity(body)
        }
        fn step(&mut self) {
            self.steps += 1;
        }
        fn clear(&mut self) {
            self.clears += 1;
            self.inner.clear()
        }
        fn body_count(&self) -> usize {
            self.inner.body_count()
        }
    }

    fn hand(thumb: Vec2, index: Vec2) -> Vec<Vec2> {
        let mut keypoints = vec![Vec2::ZERO; 21];
        keypoints[crate::pose::THUMB_TIP] = thumb;
        keypoints[crate::pose::INDEX_FINGER_TIP] = index;
        keypoints
    }

    #[test]
    fn test_initialize_spawns_at_center() {
        let game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        assert_eq!(game.ball().pos, Vec2::new(320.0, 240.0));
        assert_eq!(game.paddle().points[0].pos, Vec2::new(270.0, 240.0));
        assert_eq!(game.paddle().points[1].pos, Vec2::new(370.0, 240.0));
        assert_eq!(game.world().body_count(), 3);
    }

    #[test]
    fn test_initialize_rejects_bad_settings() {
        let field = Field::new(640.0, 480.0);
        for jitter in [-1.0, f32::NAN] {
            let settings = Settings {
                bounce: BounceParams { boost: 1.2, jitter },
                ..Default::default()
            };
            assert!(matches!(
                Game::initialize(field, &settings),
                Err(ConfigError::Invalid(_))
            ));
        }
    }

    #[test]
    fn test_initialize_rejects_bad_field() {
        let settings = Settings::default();
        for field in [
            Field::new(f32::NAN, 480.0),
            Field::new(640.0, 0.0),
            Field::new(f32::INFINITY, 480.0),
        ] {
            assert!(matches!(
                Game::initialize(field, &settings),
                Err(ConfigError::Invalid(_))
            ));
        }
        let world = FrozenWorld::default();
        assert!(Game::with_world(world, Field::new(-640.0, 480.0), &settings).is_err());
    }

    #[test]
    fn test_pose_applies_on_next_update() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        let thumb = Vec2::new(100.0, 400.0);
        let index = Vec2::new(200.0, 410.0);
        game.on_hand_keypoints(&[hand(thumb, index)]).unwrap();

        // Not applied until the frame runs
        assert_eq!(game.paddle().points[0].pos, Vec2::new(270.0, 240.0));

        let report = game.update();
        assert!(report.paddle_moved);
        assert_eq!(game.paddle().points[0].pos, thumb);
        assert_eq!(game.paddle().points[1].pos, index);
        assert_eq!(game.world().position(game.paddle().points[0].body), Some(thumb));
    }

    #[test]
    fn test_latest_sample_supersedes() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        game.on_pose_sample(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)).unwrap();
        game.on_pose_sample(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)).unwrap();
        game.update();
        assert_eq!(game.paddle().points[0].pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_no_hands_freezes_paddle() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        game.on_pose_sample(Vec2::new(50.0, 50.0), Vec2::new(90.0, 50.0)).unwrap();
        game.update();
        let frozen = game.paddle().clone();

        for _ in 0..30 {
            game.on_hand_keypoints(&[]).unwrap();
            let report = game.update();
            assert!(!report.paddle_moved);
            if report.reset {
                break;
            }
            assert_eq!(game.paddle(), &frozen);
        }
    }

    #[test]
    fn test_empty_result_supersedes_pending_sample() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        game.on_pose_sample(Vec2::new(5.0, 5.0), Vec2::new(9.0, 9.0)).unwrap();
        game.on_hand_keypoints(&[]).unwrap();

        let report = game.update();
        assert!(!report.paddle_moved);
        assert_eq!(game.paddle().points[0].pos, Vec2::new(270.0, 240.0));
    }

    #[test]
    fn test_invalid_sample_rejected() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        game.on_pose_sample(Vec2::new(5.0, 5.0), Vec2::new(9.0, 9.0)).unwrap();

        let err = game
            .on_pose_sample(Vec2::new(f32::NAN, 0.0), Vec2::ZERO)
            .unwrap_err();
        assert_eq!(err, PoseError::NonFinite);
        let err = game.on_hand_keypoints(&[vec![Vec2::ZERO; 3]]).unwrap_err();
        assert_eq!(err, PoseError::MissingLandmark(crate::pose::THUMB_TIP));

        // The earlier good sample is still the pending one
        game.update();
        assert_eq!(game.paddle().points[0].pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_mirror_input() {
        let settings = Settings {
            mirror_input: true,
            ..Default::default()
        };
        let mut game = Game::initialize(Field::new(640.0, 480.0), &settings).unwrap();
        game.on_pose_sample(Vec2::new(100.0, 10.0), Vec2::new(200.0, 10.0)).unwrap();
        game.update();
        assert_eq!(game.paddle().points[0].pos, Vec2::new(540.0, 10.0));
        assert_eq!(game.paddle().points[1].pos, Vec2::new(440.0, 10.0));
    }

    #[test]
    fn test_custom_world_is_stepped_once_per_frame() {
        let world = FrozenWorld::default();
        let mut game = Game::with_world(world, Field::new(640.0, 480.0), &Settings::default()).unwrap();
        assert_eq!(game.world().clears, 1);

        // Paddle away from the ball so nothing resets
        game.on_pose_sample(Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0)).unwrap();
        for _ in 0..5 {
            game.update();
        }
        assert_eq!(game.world().steps, 5);
        assert_eq!(game.ball().pos, Vec2::new(320.0, 240.0));
        assert_eq!(game.state().time_ticks, 5);
    }

    #[test]
    fn test_falls_out_and_resets() {
        let mut game = Game::initialize(Field::new(640.0, 480.0), &Settings::default()).unwrap();
        game.on_pose_sample(Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0)).unwrap();

        let mut resets = 0;
        for _ in 0..200 {
            if game.update().reset {
                resets += 1;
                break;
            }
        }
        assert_eq!(resets, 1);
        assert_eq!(game.state().round, 2);
        assert_eq!(game.ball().pos, Vec2::new(320.0, 240.0));
    }
}
