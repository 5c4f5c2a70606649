//! Round state machine
//!
//! `Active` → `GameOver` when a pin hits another pin, `GameOver` → `Active`
//! when the reset timer fires. While active, the target picks a new rotation
//! speed every rotation interval.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::GamePhase;
use super::timer::{Scheduler, TimerHandle};
use crate::tuning::Tuning;

/// Timers owned by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvTimer {
    ResampleRotation,
    ResetRound,
}

/// Holder of round phase and target rotation speed
#[derive(Debug, Clone)]
pub struct Environment {
    phase: GamePhase,
    /// Radians added to every resolved pin's angle per tick
    rotation_speed: f32,
    rotation_timer: Option<TimerHandle>,
    reset_timer: Option<TimerHandle>,
    timers: Scheduler<EnvTimer>,
    rng: Pcg32,
}

impl Environment {
    /// Start active, with a freshly sampled rotation speed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut env = Self {
            phase: GamePhase::Active,
            rotation_speed: 0.0,
            rotation_timer: None,
            reset_timer: None,
            timers: Scheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        env.resample_rotation(tuning);
        env
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Whether a rotation change is scheduled
    pub fn is_rotating(&self) -> bool {
        self.rotation_timer
            .is_some_and(|handle| self.timers.is_pending(handle))
    }

    /// End the current round. Returns false if it was already over.
    pub fn end_round(&mut self, tuning: &Tuning) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        if let Some(handle) = self.rotation_timer.take() {
            self.timers.cancel(handle);
        }
        self.reset_timer = Some(
            self.timers
                .schedule(tuning.reset_delay(), EnvTimer::ResetRound),
        );
        log::debug!("Round over, reset in {} ms", tuning.reset_delay_ms);
        true
    }

    /// Advance timers by `dt`. Returns true when a new round started and the
    /// board must be cleared.
    pub fn advance_timers(&mut self, dt: std::time::Duration, tuning: &Tuning) -> bool {
        let mut round_reset = false;
        for timer in self.timers.advance(dt) {
            match timer {
                EnvTimer::ResampleRotation => {
                    self.rotation_timer = None;
                    if !self.is_game_over() {
                        self.resample_rotation(tuning);
                    }
                }
                EnvTimer::ResetRound => {
                    self.reset_timer = None;
                    self.phase = GamePhase::Active;
                    self.resample_rotation(tuning);
                    round_reset = true;
                }
            }
        }
        round_reset
    }

    /// Pick a new rotation speed and schedule the next change
    fn resample_rotation(&mut self, tuning: &Tuning) {
        let steps = &tuning.rotation_steps;
        if !steps.is_empty() {
            self.rotation_speed = steps[self.rng.random_range(0..steps.len())];
        }
        if let Some(handle) = self.rotation_timer.take() {
            self.timers.cancel(handle);
        }
        self.rotation_timer = Some(
            self.timers
                .schedule(tuning.rotation_interval(), EnvTimer::ResampleRotation),
        );
    }

    #[cfg(test)]
    pub(crate) fn force_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }
}
