//! Game state and core simulation types
//!
//! `GameState` is the single context record handed to `tick` and to the
//! renderer; nothing in the simulation lives in globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::pin_source::PinSource;
use crate::tuning::Tuning;
use crate::{normalize_angle, polar_to_cartesian};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pins can be thrown and the target spins
    Active,
    /// A pin hit another pin; waiting for the automatic reset
    GameOver,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PinThrown,
    /// A pin reached the target (index in throw order)
    PinResolved(usize),
    /// A pin's tip hit another pin; carries the frozen score
    RoundOver { score: u32 },
    /// Pins cleared, new round started
    RoundReset,
}

/// A thrown pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Head of the pin (drawn as a filled circle)
    pub position: Vec2,
    /// Point of the pin, the end that sticks into the target
    pub tip: Vec2,
    /// Orbit angle around the target center (radians)
    pub angle: f32,
    /// Head radius; other tips within this distance collide
    pub tip_radius: f32,
    /// True once the pin is stuck in the target
    pub resolved: bool,
}

impl Pin {
    /// A fresh pin with its head at `position`, tip pointing at the target
    pub fn new(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            tip: position - Vec2::new(0.0, tuning.pin_length),
            angle: std::f32::consts::FRAC_PI_2,
            tip_radius: tuning.tip_radius,
            resolved: false,
        }
    }

    /// Move an in-flight pin toward the target
    pub fn travel(&mut self, speed: f32) {
        self.position.y -= speed;
        self.tip.y -= speed;
    }

    /// Spin a resolved pin around the target by `rotation_speed` radians
    pub fn orbit(&mut self, target: &Target, pin_length: f32, rotation_speed: f32) {
        self.angle = normalize_angle(self.angle + rotation_speed);
        let rim = target.radius();
        self.position = polar_to_cartesian(target.position, rim + pin_length, self.angle);
        self.tip = polar_to_cartesian(target.position, rim, self.angle);
    }

    /// Distance from the target center to the pin head
    #[cfg(test)]
    pub fn distance_to(&self, target: &Target) -> f32 {
        self.position.distance(target.position)
    }
}

/// The spinning goal pins are thrown at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vec2,
    pub diameter: f32,
}

impl Target {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            position: tuning.target_position,
            diameter: tuning.target_diameter,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance table the state was built with
    pub tuning: Tuning,
    /// Round phase, rotation speed and timers
    pub environment: Environment,
    pub target: Target,
    pub pin_source: PinSource,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pins thrown since start (across rounds)
    pub pins_thrown: u64,
    /// Score captured when the round ended
    pub(crate) frozen_score: Option<u32>,
    /// Events produced since the last drain
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            environment: Environment::new(seed, &tuning),
            target: Target::new(&tuning),
            pin_source: PinSource::new(tuning.source_position),
            time_ticks: 0,
            pins_thrown: 0,
            frozen_score: None,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.environment.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.environment.is_game_over()
    }

    /// Score for this frame: resolved pins, or the frozen value once the round ended
    pub fn score(&self) -> u32 {
        match (self.phase(), self.frozen_score) {
            (GamePhase::GameOver, Some(score)) => score,
            _ => self.pin_source.resolved_count(),
        }
    }

    /// Clear the board for a new round
    pub fn reset_round(&mut self) {
        self.pin_source.clear();
        self.frozen_score = None;
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pin_at_source() {
        let tuning = Tuning::default();
        let pin = Pin::new(tuning.source_position, &tuning);
        assert_eq!(pin.position, tuning.source_position);
        assert!((pin.position.y - pin.tip.y - tuning.pin_length).abs() < 1e-4);
        assert!(!pin.resolved);
    }

    #[test]
    fn test_orbit_puts_tip_on_rim() {
        let tuning = Tuning::default();
        let target = Target::new(&tuning);
        let mut pin = Pin::new(tuning.source_position, &tuning);
        pin.resolved = true;
        pin.orbit(&target, tuning.pin_length, 0.0);

        // Angle starts at π/2: straight below the target (y grows downward)
        assert!((pin.tip.x - target.position.x).abs() < 1e-3);
        assert!((pin.tip.y - (target.position.y + target.radius())).abs() < 1e-3);
        assert!((pin.distance_to(&target) - tuning.orbit_radius()).abs() < 1e-3);
    }

    #[test]
    fn test_reset_round_twice_is_empty() {
        let mut state = GameState::new(1);
        state.pin_source.throw_pin(&state.tuning);
        state.reset_round();
        assert!(state.pin_source.is_empty());
        state.reset_round();
        assert!(state.pin_source.is_empty());
        assert_eq!(state.score(), 0);
    }
}
