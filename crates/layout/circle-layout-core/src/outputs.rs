//! Render-facing per-element output.

use serde::{Deserialize, Serialize};

/// Snapshot of one element for the current tick. A rendering adapter paints
/// the element centered at (x, y) with the given opacity; nothing else about
/// the animation state is needed to draw a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}
