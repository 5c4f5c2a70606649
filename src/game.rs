//! Top-level game loop controller
//!
//! Owns the simulation state, score tracker, settings and store, and drives
//! the fixed-timestep simulation from variable frame times.

use crate::consts::*;
use crate::persistence::KvStore;
use crate::renderer::{Frame, build_frame};
use crate::score::ScoreTracker;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Game instance holding all state
pub struct Game<S: KvStore> {
    pub state: GameState,
    pub scores: ScoreTracker,
    settings: Settings,
    store: S,
    input: TickInput,
    accumulator: f32,
}

impl<S: KvStore> Game<S> {
    /// New game with default tuning; wipes the store first
    pub fn new(seed: u64, store: S) -> Self {
        Self::start(seed, Tuning::default(), store, true)
    }

    /// New game with custom tuning. `clear_store_on_start` wipes previous
    /// data before settings are read.
    pub fn with_tuning(
        seed: u64,
        tuning: Tuning,
        store: S,
        clear_store_on_start: bool,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::start(seed, tuning, store, clear_store_on_start))
    }

    fn start(seed: u64, tuning: Tuning, store: S, clear_store_on_start: bool) -> Self {
        if clear_store_on_start {
            store.clear();
        }
        let settings = Settings::load(&store);
        log::info!("Game initialized with seed {} (best {})", seed, settings.score);
        Self {
            state: GameState::with_tuning(seed, tuning),
            scores: ScoreTracker::new(settings.score),
            settings,
            store,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pointer clicked: throw a pin on the next tick
    pub fn click(&mut self) {
        if !self.state.is_game_over() {
            self.input.throws += 1;
        }
    }

    /// Run simulation ticks for `dt` seconds of wall time
    pub fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Advance exactly one tick and settle the score
    pub fn step(&mut self) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, TICK);

        for event in self.state.drain_events() {
            match event {
                GameEvent::PinThrown => log::debug!("Pin thrown"),
                GameEvent::PinResolved(i) => log::debug!("Pin {} stuck", i),
                GameEvent::RoundOver { score } => log::info!("Round over with score {}", score),
                GameEvent::RoundReset => log::info!("New round"),
            }
        }

        let game_over = self.state.is_game_over();
        if let Some(best) = self.scores.observe(self.state.score(), game_over) {
            log::info!("New best score: {}", best);
            self.settings.score = best;
            self.settings.save(&self.store);
        }
    }

    /// Build the frame to draw
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, &self.scores)
    }
}
