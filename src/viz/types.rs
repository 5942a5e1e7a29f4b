//! Public types for the rendering adapter.

use crate::color::Gradient;

/// How balls are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Maps each ball's color key to a fill color.
    pub gradient: Gradient,
    /// Input index of a selected item, outlined with a black stroke.
    pub highlight: Option<usize>,
    /// Stroke width of the selection outline, in pixels.
    pub highlight_stroke: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gradient: Gradient::RedGreen,
            highlight: None,
            highlight_stroke: 1,
        }
    }
}
