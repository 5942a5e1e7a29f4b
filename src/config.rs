//! Immutable layout configuration.
//!
//! Defaults mirror a 600x400 canvas split into five bins over [0, 1] with 10% padding.

use crate::error::{LayoutError, Result};
use crate::models::{CanvasSpec, ValueRange};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas: CanvasSpec,
    pub range: ValueRange,
    /// Number of value bins. Zero yields an empty layout.
    pub bins: usize,
    /// Quantize color keys into this many steps; `None` keeps them continuous.
    pub color_bins: Option<usize>,
    /// Fraction of each slot left empty around a ball, in [0, 1).
    pub padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            range: ValueRange::default(),
            bins: 5,
            color_bins: None,
            padding: 0.1,
        }
    }
}

impl LayoutConfig {
    /// Report the first configuration error, if any.
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.range.validate()?;
        validate_padding(self.padding)?;
        if let Some(n) = self.color_bins
            && n < 2
        {
            return Err(LayoutError::InvalidColorBins(n));
        }
        Ok(())
    }
}

pub(crate) fn validate_padding(padding: f64) -> Result<()> {
    if !(0.0..1.0).contains(&padding) {
        return Err(LayoutError::InvalidPadding(padding));
    }
    Ok(())
}

/// Load a JSON configuration file. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<LayoutConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LayoutConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        let cfg = LayoutConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bins, 5);
        assert_eq!(cfg.canvas.width, 600.0);
        assert_eq!(cfg.canvas.height, 400.0);
    }

    #[test]
    fn rejects_bad_padding_and_color_bins() {
        let mut cfg = LayoutConfig {
            padding: 1.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(LayoutError::InvalidPadding(1.0)));
        cfg.padding = -0.1;
        assert!(cfg.validate().is_err());
        cfg.padding = 0.0;
        cfg.color_bins = Some(1);
        assert_eq!(cfg.validate(), Err(LayoutError::InvalidColorBins(1)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("cfg.json");
        fs::write(&p, r#"{ "bins": 8, "color_bins": 4, "range": { "min": -1.0, "max": 1.0 } }"#)
            .unwrap();
        let cfg = load_config(&p).unwrap();
        assert_eq!(cfg.bins, 8);
        assert_eq!(cfg.color_bins, Some(4));
        assert_eq!(cfg.range.min, -1.0);
        assert_eq!(cfg.padding, 0.1);
        assert_eq!(cfg.canvas, CanvasSpec::default());
    }
}
