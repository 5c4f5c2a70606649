//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Pins processed in throw order
//! - Timers run on simulated time
//! - No rendering or platform dependencies

pub mod collision;
pub mod environment;
pub mod pin_source;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{first_pin_hit, tip_hits_pin, tip_reached_target};
pub use environment::{EnvTimer, Environment};
pub use pin_source::{AdvanceOutcome, PinSource};
pub use state::{GameEvent, GamePhase, GameState, Pin, Target};
pub use tick::{TickInput, tick};
pub use timer::{Scheduler, TimerHandle};
