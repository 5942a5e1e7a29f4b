//! Split a value range into equal-width bins and assign every item to exactly one.

use crate::error::{LayoutError, Result};
use crate::models::{Bin, BinItem, BinSpec, ValueRange};

/// Partition `data` into `n_bins` bins over `range`, laid out across `canvas_width` pixels.
///
/// Values outside the range, and non-finite values, are clamped into the first or last bin
/// so that no item is ever dropped. Each bin's items are sorted ascending by value; the sort
/// is stable, so ties keep their input order. `n_bins == 0` yields no bins.
pub fn partition<'a, T, F>(
    data: &'a [T],
    extractor: F,
    range: ValueRange,
    n_bins: usize,
    canvas_width: f64,
) -> Result<Vec<Bin<'a, T>>>
where
    F: Fn(&T) -> f64,
{
    range.validate()?;
    if !canvas_width.is_finite() || canvas_width <= 0.0 {
        return Err(LayoutError::InvalidCanvasWidth(canvas_width));
    }
    if n_bins == 0 {
        return Ok(Vec::new());
    }

    let value_width = range.width() / n_bins as f64;
    let scale = canvas_width / range.width();

    let mut bins: Vec<Bin<'a, T>> = (0..n_bins)
        .map(|i| Bin {
            spec: BinSpec {
                index: i,
                // measured from range.min so the bins tile [0, canvas_width]
                x0: i as f64 * value_width * scale,
                width: value_width * scale,
            },
            items: Vec::new(),
        })
        .collect();

    for (index, item) in data.iter().enumerate() {
        let value = extractor(item);
        let b = bin_index(value, range, n_bins);
        bins[b].items.push(BinItem { item, index, value });
    }

    for bin in bins.iter_mut() {
        bin.items.sort_by(|a, b| a.value.total_cmp(&b.value));
    }

    Ok(bins)
}

/// Bin index for `value`, clamped to `[0, n_bins - 1]`. NaN goes to the first bin.
pub fn bin_index(value: f64, range: ValueRange, n_bins: usize) -> usize {
    if n_bins == 0 {
        return 0;
    }
    let value_width = range.width() / n_bins as f64;
    let raw = ((value - range.min) / value_width).floor();
    let last = n_bins - 1;
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}
