use crate::models::Layout;
use serde::{Deserialize, Serialize};

/// Summary statistics for one bin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinSummary {
    pub bin: usize,
    pub count: usize,
    /// Items whose value was not finite (clamped into this bin).
    pub non_finite: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-bin statistics over the extracted values.
pub fn bin_summary<T>(layout: &Layout<'_, T>) -> Vec<BinSummary> {
    let mut out = Vec::with_capacity(layout.bins.len());
    for bin in &layout.bins {
        // placements are already sorted by value
        let vals: Vec<f64> = bin
            .placements
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .collect();
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(BinSummary {
            bin: bin.spec.index,
            count,
            non_finite: bin.placements.len() - count,
            min,
            max,
            mean,
            median,
        });
    }
    out
}
