//! Read-only render snapshot
//!
//! Drawing happens outside the crate. A renderer gets a [`Scene`] each frame
//! and never writes anything back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Segment};

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Snapshot of everything visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub ball: Circle,
    /// `[thumb tip, index fingertip]`
    pub control_points: [Circle; 2],
    pub segment: Segment,
    /// Collision thickness around `segment`, for debug overlays
    pub contact_radius: f32,
    pub round: u32,
}

/// Number of floats in [`Scene::to_flat`]
pub const FLAT_LEN: usize = 13;

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let [p0, p1] = &state.paddle.points;
        Self {
            ball: Circle {
                center: state.ball.pos,
                radius: state.ball.radius,
            },
            control_points: [
                Circle {
                    center: p0.pos,
                    radius: p0.radius,
                },
                Circle {
                    center: p1.pos,
                    radius: p1.radius,
                },
            ],
            segment: state.paddle.segment(),
            contact_radius: state.paddle.contact_radius(),
            round: state.round,
        }
    }

    /// Pack into a flat array for hosts without structured interop:
    ///
    /// `[ball x, y, r, thumb x, y, r, index x, y, r, contact r, round, seg len, seg angle]`
    pub fn to_flat(&self) -> Vec<f32> {
        let dir = self.segment.direction();
        let mut out = Vec::with_capacity(FLAT_LEN);
        for circle in std::iter::once(&self.ball).chain(&self.control_points) {
            out.extend_from_slice(&[circle.center.x, circle.center.y, circle.radius]);
        }
        out.push(self.contact_radius);
        out.push(self.round as f32);
        out.push(dir.length());
        out.push(dir.y.atan2(dir.x));
        out
    }
}
