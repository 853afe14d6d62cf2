//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Physics behind the `PhysicsWorld` trait
//! - No rendering, tracking or platform dependencies

pub mod body;
pub mod bounds;
pub mod collision;
pub mod round;
pub mod state;
pub mod tick;

pub use body::{BodyHandle, BodyKind, EulerWorld, PhysicsWorld, RigidBody};
pub use collision::{Contact, bounce_velocity, segment_contact, test_and_resolve};
pub use round::{check_and_maybe_reset, is_out_of_play};
pub use state::{Ball, ControlPoint, Field, GameState, Paddle, Segment};
pub use tick::{TickReport, tick};
