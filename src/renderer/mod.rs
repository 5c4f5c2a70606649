//! Rendering module
//!
//! `scene` builds a plain triangle list from game state; `pipeline` draws it
//! with WebGPU. HUD text is left to the platform layer.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::{Frame, Hud, build_frame};
pub use vertex::Vertex;
