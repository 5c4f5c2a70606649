//! Frame building
//!
//! Turns game state into a backend-neutral frame: a clear color, a triangle
//! list in canvas coordinates, and the HUD text the platform layer draws.

use super::shapes::{CIRCLE_SEGMENTS, circle, line, ring};
use super::vertex::{Vertex, colors};
use crate::score::ScoreTracker;
use crate::sim::GameState;

/// Stroke width of a pin shaft
pub const PIN_STROKE: f32 = 1.5;
/// Stroke width of the pin source outline
pub const SOURCE_STROKE: f32 = 7.0;

/// Text overlay for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Score drawn over the target center
    pub score: String,
    pub score_y: f32,
    /// Best score line near the bottom of the canvas
    pub best: String,
    pub best_y: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub hud: Hud,
}

/// Background color: red once over, green while beating the best, else yellow
pub fn background(state: &GameState, scores: &ScoreTracker) -> [f32; 4] {
    if state.is_game_over() {
        colors::RED
    } else if scores.is_record() {
        colors::GREEN
    } else {
        colors::YELLOW
    }
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState, scores: &ScoreTracker) -> Frame {
    let tuning = &state.tuning;
    let pins = state.pin_source.pins();

    // Per pin: shaft quad plus head disc
    let mut vertices = Vec::with_capacity(
        (CIRCLE_SEGMENTS as usize) * 6 + pins.len() * (6 + CIRCLE_SEGMENTS as usize * 3),
    );

    vertices.extend(ring(
        state.pin_source.position,
        tuning.source_diameter / 2.0,
        SOURCE_STROKE,
        colors::DARK,
        CIRCLE_SEGMENTS,
    ));

    for pin in pins {
        vertices.extend(line(pin.position, pin.tip, PIN_STROKE, colors::DARK));
        vertices.extend(circle(pin.position, pin.tip_radius, colors::DARK, CIRCLE_SEGMENTS));
    }

    vertices.extend(circle(
        state.target.position,
        state.target.radius(),
        colors::DARK,
        CIRCLE_SEGMENTS * 2,
    ));

    Frame {
        clear_color: background(state, scores),
        vertices,
        hud: Hud {
            score: scores.current().to_string(),
            score_y: tuning.score_y,
            best: scores.best_label(),
            best_y: tuning.best_score_y,
        },
    }
}
