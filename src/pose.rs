//! Hand-tracker input
//!
//! The tracker reports zero or one hand per detection, each a list of
//! keypoints in field coordinates. Only the thumb tip and index fingertip
//! matter here. Detections arrive on their own schedule, so the game reads
//! them through a single-slot mailbox: a newer sample replaces an older one
//! that was never consumed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PoseError;

/// Keypoint index of the thumb tip in a tracked hand
pub const THUMB_TIP: usize = 4;
/// Keypoint index of the index fingertip in a tracked hand
pub const INDEX_FINGER_TIP: usize = 8;

/// The two fingertip positions that define the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    pub thumb_tip: Vec2,
    pub index_tip: Vec2,
}

impl PoseSample {
    /// Build a sample, rejecting NaN/infinite coordinates
    pub fn new(thumb_tip: Vec2, index_tip: Vec2) -> Result<Self, PoseError> {
        if !thumb_tip.is_finite() || !index_tip.is_finite() {
            return Err(PoseError::NonFinite);
        }
        Ok(Self {
            thumb_tip,
            index_tip,
        })
    }

    /// Pick the fingertips out of a full hand keypoint list
    pub fn from_keypoints(keypoints: &[Vec2]) -> Result<Self, PoseError> {
        let thumb = keypoints
            .get(THUMB_TIP)
            .ok_or(PoseError::MissingLandmark(THUMB_TIP))?;
        let index = keypoints
            .get(INDEX_FINGER_TIP)
            .ok_or(PoseError::MissingLandmark(INDEX_FINGER_TIP))?;
        Self::new(*thumb, *index)
    }

    /// Flip horizontally for a mirrored (selfie) camera feed
    pub fn mirrored(self, width: f32) -> Self {
        let flip = |p: Vec2| Vec2::new(width - p.x, p.y);
        Self {
            thumb_tip: flip(self.thumb_tip),
            index_tip: flip(self.index_tip),
        }
    }
}

/// Single-slot, latest-wins pose mailbox
///
/// Written by the tracker callback, drained once at the start of each frame.
#[derive(Debug, Clone, Default)]
pub struct PoseMailbox {
    slot: Option<PoseSample>,
}

impl PoseMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sample, replacing any unread one
    pub fn post(&mut self, sample: PoseSample) {
        self.slot = Some(sample);
    }

    /// Take the pending sample, leaving the slot empty
    pub fn take(&mut self) -> Option<PoseSample> {
        self.slot.take()
    }

    /// Drop any pending sample
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
