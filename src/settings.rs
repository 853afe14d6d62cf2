//! Game settings and tuning
//!
//! Loaded once per session from JSON. Every field falls back to the
//! defaults in [`crate::consts`], so a partial file is valid.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Field;

/// Paddle-hit response parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceParams {
    /// Multiplier on the vertical speed after a hit
    pub boost: f32,
    /// Half-width of the uniform horizontal jitter
    pub jitter: f32,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            boost: BOUNCE_BOOST,
            jitter: BOUNCE_JITTER,
        }
    }
}

/// Session settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Default field size; an explicit field given to `Game::initialize`
    /// takes precedence
    pub field_width: f32,
    pub field_height: f32,

    // === Bodies ===
    pub ball_radius: f32,
    pub control_point_radius: f32,
    /// Added to the control-point radius to get the paddle contact radius
    pub contact_margin: f32,
    /// Spawn offset of each control point from field center
    pub control_point_offset: f32,

    // === Physics ===
    pub bounce: BounceParams,
    /// Downward acceleration, units per tick²
    pub gravity: f32,
    /// Fraction of velocity lost per tick, in [0, 1)
    pub air_friction: f32,

    // === Session ===
    /// Seed for bounce jitter
    pub seed: u64,
    /// Mirror tracker x coordinates (selfie camera)
    pub mirror_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            control_point_radius: CONTROL_POINT_RADIUS,
            contact_margin: CONTACT_MARGIN,
            control_point_offset: CONTROL_POINT_OFFSET,

            bounce: BounceParams::default(),
            gravity: GRAVITY,
            air_friction: AIR_FRICTION,

            seed: DEFAULT_SEED,
            mirror_input: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The play field described by these settings
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field().validate()?;
        positive("ball_radius", self.ball_radius)?;
        positive("control_point_radius", self.control_point_radius)?;
        positive("bounce.boost", self.bounce.boost)?;
        non_negative("contact_margin", self.contact_margin)?;
        non_negative("control_point_offset", self.control_point_offset)?;
        non_negative("bounce.jitter", self.bounce.jitter)?;
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid("gravity must be finite".to_string()));
        }
        if !(0.0..1.0).contains(&self.air_friction) {
            return Err(ConfigError::Invalid(format!(
                "air_friction must be in [0, 1), got {}",
                self.air_friction
            )));
        }
        Ok(())
    }
}

pub(crate) fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}
