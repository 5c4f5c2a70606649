//! Pin Orbit - throw pins into a spinning target
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pins, target, round state machine, timers)
//! - `score`: Current/best score bookkeeping
//! - `settings`: Persisted best score
//! - `persistence`: Key-value store seam (LocalStorage on web, memory elsewhere)
//! - `renderer`: Frame building and the WebGPU pipeline
//! - `tuning`: Data-driven game balance
//! - `game`: Top-level loop controller tying the above together

pub mod game;
pub mod persistence;
pub mod renderer;
pub mod score;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use score::ScoreTracker;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulated time that passes on each tick, used by the timer scheduler
    pub const TICK: Duration = Duration::from_micros(16_667);
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions (logical units, y grows downward)
    pub const CANVAS_WIDTH: f32 = 320.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Round reset delay after a collision
    pub const RESET_DELAY_MS: u64 = 2000;
    /// Interval between rotation speed changes
    pub const ROTATION_INTERVAL_MS: u64 = 1000;
    /// Angular increments (radians per tick) the target may spin at
    pub const ROTATION_STEPS: [f32; 6] = [0.03, 0.015, 0.05, -0.03, -0.015, -0.05];
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Number of fixed ticks needed for `ms` of simulated time to elapse
pub fn ticks_for_ms(ms: u64) -> u64 {
    let tick_us = consts::TICK.as_micros() as u64;
    (ms * 1000).div_ceil(tick_us)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_to_cartesian_offsets_from_center() {
        let p = polar_to_cartesian(Vec2::new(10.0, 20.0), 5.0, std::f32::consts::FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_angle_wraps() {
        use std::f32::consts::PI;
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_ticks_for_ms() {
        assert_eq!(ticks_for_ms(1000), 60);
        assert_eq!(ticks_for_ms(2000), 120);
        assert_eq!(ticks_for_ms(0), 0);
    }
}
