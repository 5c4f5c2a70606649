//! Data-driven game balance
//!
//! Every gameplay dimension is derived from the canvas size by default, so a
//! different canvas keeps the same proportions. Values can be overridden from
//! JSON for experiments.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning table is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rotation_steps must not be empty")]
    NoRotationSteps,
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("tip_radius ({tip_radius}) must be smaller than pin_length ({pin_length})")]
    TipTooLarge { tip_radius: f32, pin_length: f32 },
}

/// Gameplay tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Canvas width (logical units)
    pub width: f32,
    /// Canvas height (logical units)
    pub height: f32,

    // === Timers ===
    /// Delay between a collision and the next round
    pub reset_delay_ms: u64,
    /// How often the target picks a new rotation speed
    pub rotation_interval_ms: u64,
    /// Rotation increments (radians per tick) sampled uniformly
    pub rotation_steps: Vec<f32>,

    // === Target ===
    pub target_position: Vec2,
    pub target_diameter: f32,

    // === Pin source ===
    pub source_position: Vec2,
    pub source_diameter: f32,
    /// Distance a thrown pin travels per tick
    pub pin_speed: f32,
    /// Distance between a pin's head and its tip
    pub pin_length: f32,
    /// Radius of the pin head, also the collision tolerance
    pub tip_radius: f32,

    // === HUD ===
    /// Row of the current score (drawn over the target)
    pub score_y: f32,
    /// Row of the "Your Best" line
    pub best_score_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_canvas(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Tuning {
    /// Proportional defaults for a canvas of the given size
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            width,
            height,

            reset_delay_ms: RESET_DELAY_MS,
            rotation_interval_ms: ROTATION_INTERVAL_MS,
            rotation_steps: ROTATION_STEPS.to_vec(),

            target_position: Vec2::new(width / 2.0, height / 4.0),
            target_diameter: height / 5.0,

            source_position: Vec2::new(width / 2.0, height * 0.85),
            source_diameter: height * 0.03,
            pin_speed: height * 0.04,
            pin_length: height * 0.13,
            tip_radius: height * 0.012,

            score_y: height / 4.0 + height / 100.0,
            best_score_y: height - height / 15.0,
        }
    }

    /// Parse and validate a tuning table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject tables the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.rotation_steps.is_empty() {
            return Err(TuningError::NoRotationSteps);
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("target_diameter", self.target_diameter),
            ("pin_speed", self.pin_speed),
            ("pin_length", self.pin_length),
            ("tip_radius", self.tip_radius),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { name, value });
            }
        }
        if self.tip_radius >= self.pin_length {
            return Err(TuningError::TipTooLarge {
                tip_radius: self.tip_radius,
                pin_length: self.pin_length,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    #[inline]
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    /// Radius at which resolved pin heads orbit the target center
    #[inline]
    pub fn orbit_radius(&self) -> f32 {
        self.target_diameter / 2.0 + self.pin_length
    }
}
