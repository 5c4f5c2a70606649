//! Pin spawner and per-tick pin motion

use glam::Vec2;

use super::collision::{first_pin_hit, tip_reached_target};
use super::environment::Environment;
use super::state::{Pin, Target};
use crate::tuning::Tuning;

/// What happened while advancing the pins for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// Indices of pins that reached the target this tick
    pub resolved: Vec<usize>,
    /// Index of the pin whose tip hit another pin, ending the round
    pub collided: Option<usize>,
}

/// Owner of every pin in the current round
#[derive(Debug, Clone)]
pub struct PinSource {
    /// Where new pins appear
    pub position: Vec2,
    /// Pins in throw order
    pub(crate) pins: Vec<Pin>,
}

impl PinSource {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            pins: Vec::new(),
        }
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Number of pins stuck in the target
    pub fn resolved_count(&self) -> u32 {
        self.pins.iter().filter(|p| p.resolved).count() as u32
    }

    /// Spawn a new in-flight pin at the source
    pub fn throw_pin(&mut self, tuning: &Tuning) {
        self.pins.push(Pin::new(self.position, tuning));
    }

    /// Remove every pin
    pub fn clear(&mut self) {
        self.pins.clear();
    }

    /// Advance every pin by one tick, in throw order.
    ///
    /// In-flight pins either stick into the target, hit another pin (ending
    /// the round and freezing the board for the rest of the tick), or move
    /// on. Resolved pins orbit at the environment's current rotation speed.
    pub fn advance(
        &mut self,
        target: &Target,
        environment: &mut Environment,
        tuning: &Tuning,
    ) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome::default();

        for i in 0..self.pins.len() {
            if self.pins[i].resolved {
                self.pins[i].orbit(target, tuning.pin_length, environment.rotation_speed());
                continue;
            }

            if tip_reached_target(self.pins[i].tip, target) {
                self.pins[i].resolved = true;
                outcome.resolved.push(i);
                continue;
            }

            if let Some(hit) = first_pin_hit(&self.pins, i) {
                log::debug!("Pin {} hit pin {}", i, hit);
                environment.end_round(tuning);
                outcome.collided = Some(i);
                break;
            }

            self.pins[i].travel(tuning.pin_speed);
        }

        outcome
    }
}
