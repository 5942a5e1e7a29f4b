use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Value-space domain over which binning occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Build a validated range. A zero-width range cannot be scaled to pixels.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(LayoutError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range as a fraction, clamped to [0, 1].
    /// NaN maps to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let t = (value - self.min) / self.width();
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Fixed output area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
}

impl CanvasSpec {
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(LayoutError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Horizontal pixel extent of one bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    pub index: usize,
    pub x0: f64,
    pub width: f64,
}

/// A caller item together with its position in the input and its extracted scalar.
#[derive(Debug, Clone, Copy)]
pub struct BinItem<'a, T> {
    pub item: &'a T,
    /// Position of the item in the caller's input sequence.
    pub index: usize,
    pub value: f64,
}

/// Items assigned to one bin, sorted ascending by value.
#[derive(Debug, Clone)]
pub struct Bin<'a, T> {
    pub spec: BinSpec,
    pub items: Vec<BinItem<'a, T>>,
}

/// Final geometry of one ball in canvas pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub value: f64,
    /// Scalar in [0, 1] for the external color mapping.
    pub color_key: f64,
    pub row: usize,
    pub column: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl<T> Placement<'_, T> {
    /// True when the canvas point lies inside (or on) this ball.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.r * self.r
    }
}

#[derive(Debug, Clone)]
pub struct BinLayout<'a, T> {
    pub spec: BinSpec,
    pub placements: Vec<Placement<'a, T>>,
}

/// Result of one layout run: the shared slot count and per-bin geometry.
#[derive(Debug, Clone)]
pub struct Layout<'a, T> {
    pub slots: usize,
    pub bins: Vec<BinLayout<'a, T>>,
}

impl<'a, T> Layout<'a, T> {
    /// Layout with no bins; the slot count stays at its minimum of one.
    pub fn empty() -> Self {
        Self {
            slots: 1,
            bins: Vec::new(),
        }
    }

    /// Total number of placed balls over all bins.
    pub fn len(&self) -> usize {
        self.bins.iter().map(|b| b.placements.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All placements in bin order, then fill order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement<'a, T>> {
        self.bins.iter().flat_map(|b| b.placements.iter())
    }

    /// Find the ball under a canvas point, e.g. for a click dialog.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Placement<'a, T>> {
        self.bins
            .iter()
            .filter(|b| x >= b.spec.x0 && x <= b.spec.x0 + b.spec.width)
            .flat_map(|b| b.placements.iter())
            .find(|p| p.contains(x, y))
    }
}
