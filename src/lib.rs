//! Pinch Pong - bounce a ball off the line between two fingertips
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, collisions, bounds, round reset)
//! - `pose`: Hand-tracker samples and the per-frame pose mailbox
//! - `game`: Host-facing facade that owns the world and drives frames
//! - `scene`: Read-only render snapshot
//! - `platform`: Browser bindings (wasm32 only)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod game;
pub mod platform;
pub mod pose;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, PoseError};
pub use game::Game;
pub use pose::{PoseMailbox, PoseSample};
pub use scene::Scene;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Host frame period (one simulation tick per rendered frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default play field, matching the camera capture size
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;

    /// Paddle defaults - one control point per tracked fingertip
    pub const CONTROL_POINT_RADIUS: f32 = 16.0;
    /// Extra collision thickness around the paddle segment
    pub const CONTACT_MARGIN: f32 = 20.0;
    /// Horizontal offset of each control point from field center at spawn
    pub const CONTROL_POINT_OFFSET: f32 = 50.0;

    /// Vertical speed multiplier applied on every paddle hit
    pub const BOUNCE_BOOST: f32 = 1.2;
    /// Horizontal jitter added on a paddle hit, drawn from [-J, J]
    pub const BOUNCE_JITTER: f32 = 5.0;

    /// Gravity in field units per tick² (screen y points down)
    pub const GRAVITY: f32 = 0.28;
    /// Fraction of velocity lost to air per tick
    pub const AIR_FRICTION: f32 = 0.01;

    /// Segments shorter than this cannot be hit
    pub const DEGENERATE_SEGMENT_EPSILON: f32 = 1e-4;

    /// Default RNG seed for bounce jitter
    pub const DEFAULT_SEED: u64 = 0x5eed_ba11;
}
