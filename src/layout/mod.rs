//! Ball layout: bin the data, size the slots once, then pack every bin.
//!
//! - [`binner::partition`] assigns items to equal-width value bins
//! - [`sizer::min_slots`] picks one slot count from the fullest bin
//! - [`packer::arrange`] places each bin's items column by column
//!
//! All bins share the slot count, so ball sizes are comparable across bins.

pub mod binner;
pub mod packer;
pub mod sizer;

pub use binner::{bin_index, partition};
pub use packer::arrange;
pub use sizer::{fits, min_slots};

use crate::color::ColorStep;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::models::{BinLayout, Layout};
use log::debug;

/// Compute the full layout for `data`, using `extractor` for the scalar of each item.
///
/// Fails only on an invalid configuration, before any geometry is produced. Zero bins
/// give an empty layout; empty data gives every bin with no placements.
pub fn layout<'a, T, F>(data: &'a [T], extractor: F, config: &LayoutConfig) -> Result<Layout<'a, T>>
where
    F: Fn(&T) -> f64,
{
    config.validate()?;
    let bins = partition(data, extractor, config.range, config.bins, config.canvas.width)?;
    let Some(first) = bins.first() else {
        debug!("no bins configured, nothing to lay out");
        return Ok(Layout::empty());
    };

    let max_items = bins.iter().map(|b| b.items.len()).max().unwrap_or(0);
    let slots = min_slots(first.spec.width, config.canvas.height, max_items)?;
    debug!(
        "laying out {} items in {} bins: fullest bin has {} items, {} slots per bin",
        data.len(),
        bins.len(),
        max_items,
        slots
    );

    let step = ColorStep::from_bins(config.color_bins);
    let range = config.range;
    let key = |v: f64| step.key(range.normalize(v));

    let mut out = Vec::with_capacity(bins.len());
    for bin in &bins {
        let placements = arrange(bin, slots, config.canvas.height, config.padding, key)?;
        out.push(BinLayout {
            spec: bin.spec,
            placements,
        });
    }
    Ok(Layout { slots, bins: out })
}
