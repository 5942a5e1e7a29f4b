//! Configuration errors reported by the layout core.
//!
//! The core is pure computation, so the only failure mode is a configuration
//! that cannot produce geometry. Empty data and zero bins are not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid canvas {width}x{height}: both dimensions must be finite and positive")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid canvas width {0}: must be finite and positive")]
    InvalidCanvasWidth(f64),

    #[error("invalid padding {0}: must lie in [0, 1)")]
    InvalidPadding(f64),

    #[error("invalid value range [{min}, {max}]: bounds must be finite with min < max")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid slot count {0}: at least one slot is required")]
    InvalidSlotCount(usize),

    #[error("invalid slot sizing input: bin width {bin_width}, canvas height {canvas_height}")]
    InvalidSlotInput { bin_width: f64, canvas_height: f64 },

    #[error("invalid color bin count {0}: quantized colors need at least 2 steps")]
    InvalidColorBins(usize),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
