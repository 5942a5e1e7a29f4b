//! Deterministic slot assignment inside one bin.

use crate::config::validate_padding;
use crate::error::{LayoutError, Result};
use crate::models::{Bin, Placement};

/// Place every item of `bin` into one of `n_slots` columns.
///
/// Fill is column-major: slot 0 is stacked from the canvas bottom upwards until it holds
/// `ceil(len / n_slots)` balls, then the next slot starts. Items must already be sorted.
/// `color_key` maps each item's raw value to its color key.
pub fn arrange<'a, T, K>(
    bin: &Bin<'a, T>,
    n_slots: usize,
    canvas_height: f64,
    padding: f64,
    color_key: K,
) -> Result<Vec<Placement<'a, T>>>
where
    K: Fn(f64) -> f64,
{
    if n_slots == 0 {
        return Err(LayoutError::InvalidSlotCount(n_slots));
    }
    validate_padding(padding)?;
    if bin.items.is_empty() {
        return Ok(Vec::new());
    }

    let slot_size = bin.spec.width / n_slots as f64;
    let radius = slot_size * (1.0 - padding) * 0.5;
    let n_rows = bin.items.len().div_ceil(n_slots);

    let placements = bin
        .items
        .iter()
        .enumerate()
        .map(|(i, it)| {
            let row = i % n_rows;
            let column = i / n_rows;
            Placement {
                item: it.item,
                index: it.index,
                value: it.value,
                color_key: color_key(it.value),
                row,
                column,
                cx: bin.spec.x0 + (column as f64 + 0.5) * slot_size,
                cy: canvas_height - (row as f64 + 0.5) * slot_size,
                r: radius,
            }
        })
        .collect();
    Ok(placements)
}
