//! Minimal rigid-body substrate
//!
//! The game logic only needs to register circles, move them, read them back
//! and advance time. That surface is the [`PhysicsWorld`] trait; [`EulerWorld`]
//! is the small integrator shipped with the crate. Bodies never collide with
//! each other here - all contact logic lives in [`super::collision`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{AIR_FRICTION, GRAVITY};

/// Stable reference to a body in a [`PhysicsWorld`]
///
/// Handles carry the world generation they were issued in, so a handle kept
/// across [`PhysicsWorld::clear`] no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

/// How a body responds to [`PhysicsWorld::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Integrated every step (gravity, friction, velocity)
    Dynamic,
    /// Only moves when positioned explicitly
    Kinematic,
}

/// A circular body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The rigid-body capability the simulation consumes
pub trait PhysicsWorld {
    /// Register a circular body at rest
    fn add_body(&mut self, kind: BodyKind, pos: Vec2, radius: f32) -> BodyHandle;

    fn set_position(&mut self, body: BodyHandle, pos: Vec2);

    fn set_velocity(&mut self, body: BodyHandle, vel: Vec2);

    /// Current position, `None` for a stale handle
    fn position(&self, body: BodyHandle) -> Option<Vec2>;

    /// Current velocity, `None` for a stale handle
    fn velocity(&self, body: BodyHandle) -> Option<Vec2>;

    /// Advance every body by one fixed timestep
    fn step(&mut self);

    /// Remove every body and invalidate all outstanding handles
    fn clear(&mut self);

    fn body_count(&self) -> usize;
}

/// Semi-implicit Euler world
///
/// Velocities are in field units per tick. Each step applies gravity, then
/// air friction, then moves dynamic bodies by their velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EulerWorld {
    /// Acceleration applied to dynamic bodies, units per tick²
    pub gravity: Vec2,
    /// Fraction of velocity lost per tick
    pub air_friction: f32,
    bodies: Vec<RigidBody>,
    generation: u32,
}

impl Default for EulerWorld {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, GRAVITY), AIR_FRICTION)
    }
}

impl EulerWorld {
    pub fn new(gravity: Vec2, air_friction: f32) -> Self {
        Self {
            gravity,
            air_friction,
            bodies: Vec::new(),
            generation: 0,
        }
    }

    fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        if handle.generation != self.generation {
            return None;
        }
        self.bodies.get(handle.index as usize)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        if handle.generation != self.generation {
            return None;
        }
        self.bodies.get_mut(handle.index as usize)
    }
}

impl PhysicsWorld for EulerWorld {
    fn add_body(&mut self, kind: BodyKind, pos: Vec2, radius: f32) -> BodyHandle {
        let handle = BodyHandle {
            index: self.bodies.len() as u32,
            generation: self.generation,
        };
        self.bodies.push(RigidBody {
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
        });
        handle
    }

    fn set_position(&mut self, body: BodyHandle, pos: Vec2) {
        match self.body_mut(body) {
            Some(b) => b.pos = pos,
            None => log::debug!("set_position on stale body {:?}", body),
        }
    }

    fn set_velocity(&mut self, body: BodyHandle, vel: Vec2) {
        match self.body_mut(body) {
            Some(b) => b.vel = vel,
            None => log::debug!("set_velocity on stale body {:?}", body),
        }
    }

    fn position(&self, body: BodyHandle) -> Option<Vec2> {
        self.body(body).map(|b| b.pos)
    }

    fn velocity(&self, body: BodyHandle) -> Option<Vec2> {
        self.body(body).map(|b| b.vel)
    }

    fn step(&mut self) {
        let damping = 1.0 - self.air_friction;
        for body in &mut self.bodies {
            if body.kind != BodyKind::Dynamic {
                continue;
            }
            body.vel = (body.vel + self.gravity) * damping;
            body.pos += body.vel;
        }
    }

    fn clear(&mut self) {
        self.bodies.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
