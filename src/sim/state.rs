//! Game state and core simulation types
//!
//! Screen coordinates throughout: origin top-left, y grows downward.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{BodyHandle, BodyKind, PhysicsWorld};
use crate::error::ConfigError;
use crate::settings::{BounceParams, Settings, positive};

/// The play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Both dimensions must be positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field width", self.width)?;
        positive("field height", self.height)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Backing body in the physics world
    pub body: BodyHandle,
}

impl Ball {
    /// Create a ball at rest and register its body
    pub fn spawn(world: &mut impl PhysicsWorld, pos: Vec2, radius: f32) -> Self {
        let body = world.add_body(BodyKind::Dynamic, pos, radius);
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            body,
        }
    }
}

/// One tracked fingertip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub pos: Vec2,
    pub radius: f32,
    pub body: BodyHandle,
}

impl ControlPoint {
    pub fn spawn(world: &mut impl PhysicsWorld, pos: Vec2, radius: f32) -> Self {
        let body = world.add_body(BodyKind::Kinematic, pos, radius);
        Self { pos, radius, body }
    }
}

/// Directed line segment between the two control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Vector from start to end
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}

/// The player's paddle: the segment between thumb tip and index fingertip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// `[thumb tip, index fingertip]`
    pub points: [ControlPoint; 2],
    /// Added to the control-point radius for collision thickness
    pub contact_margin: f32,
}

impl Paddle {
    /// Create both control points at `center ± (offset, 0)`
    pub fn spawn(
        world: &mut impl PhysicsWorld,
        center: Vec2,
        point_radius: f32,
        offset: f32,
        contact_margin: f32,
    ) -> Self {
        let [left, right] = Self::default_points(center, offset);
        Self {
            points: [
                ControlPoint::spawn(world, left, point_radius),
                ControlPoint::spawn(world, right, point_radius),
            ],
            contact_margin,
        }
    }

    /// Starting positions for the two control points
    pub fn default_points(center: Vec2, offset: f32) -> [Vec2; 2] {
        [
            center - Vec2::new(offset, 0.0),
            center + Vec2::new(offset, 0.0),
        ]
    }

    /// Move both control points. Non-finite input is rejected and the
    /// previous pose is kept.
    pub fn set_control_points(&mut self, p0: Vec2, p1: Vec2) -> bool {
        if !p0.is_finite() || !p1.is_finite() {
            log::warn!("Rejected non-finite control points {p0:?} {p1:?}");
            return false;
        }
        self.points[0].pos = p0;
        self.points[1].pos = p1;
        true
    }

    /// Mirror control-point positions into their kinematic bodies
    pub fn sync_bodies(&self, world: &mut impl PhysicsWorld) {
        for point in &self.points {
            world.set_position(point.body, point.pos);
        }
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.points[0].pos, self.points[1].pos)
    }

    /// Collision thickness of the segment
    pub fn contact_radius(&self) -> f32 {
        self.points[0].radius + self.contact_margin
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Paddle-hit response
    pub bounce: BounceParams,
    /// Rounds started this session (1 after creation)
    pub round: u32,
    /// Completed simulation ticks
    pub time_ticks: u64,
    /// Paddle hits in the current round
    pub round_hits: u32,
    ball_radius: f32,
    point_radius: f32,
    point_offset: f32,
    /// Jitter source for paddle hits
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Spawn the ball and paddle into `world` for the first round
    pub fn new(field: Field, settings: &Settings, world: &mut impl PhysicsWorld) -> Self {
        let center = field.center();
        Self {
            field,
            ball: Ball::spawn(world, center, settings.ball_radius),
            paddle: Paddle::spawn(
                world,
                center,
                settings.control_point_radius,
                settings.control_point_offset,
                settings.contact_margin,
            ),
            bounce: settings.bounce,
            round: 1,
            time_ticks: 0,
            round_hits: 0,
            ball_radius: settings.ball_radius,
            point_radius: settings.control_point_radius,
            point_offset: settings.control_point_offset,
            rng: Pcg32::seed_from_u64(settings.seed),
        }
    }

    /// Clear the world and recreate ball and paddle at their spawn pose
    pub fn respawn(&mut self, world: &mut impl PhysicsWorld) {
        world.clear();
        let center = self.field.center();
        self.ball = Ball::spawn(world, center, self.ball_radius);
        self.paddle = Paddle::spawn(
            world,
            center,
            self.point_radius,
            self.point_offset,
            self.paddle.contact_margin,
        );
        self.round += 1;
        self.round_hits = 0;
    }

    /// Default control-point positions for this field
    pub fn default_paddle_points(&self) -> [Vec2; 2] {
        Paddle::default_points(self.field.center(), self.point_offset)
    }
}
