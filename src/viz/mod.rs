//! Rendering adapter: draw a computed [`Layout`] to **SVG** or **PNG**.
//!
//! This is deliberately thin. The layout already holds every coordinate, so drawing is one
//! filled circle per placement plus an optional outline for a selected item.

pub mod types;
pub mod util;

pub use types::RenderOptions;

use crate::models::{CanvasSpec, Layout};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use log::debug;
use std::path::Path;

use util::{canvas_px, radius_px, rgb_color, to_px};

/// Render with default options (red-green gradient, no selection).
pub fn render<T, P: AsRef<Path>>(layout: &Layout<'_, T>, canvas: CanvasSpec, out_path: P) -> Result<()> {
    render_with(layout, canvas, out_path, &RenderOptions::default())
}

/// Render to `out_path`; `.svg` selects the SVG backend, anything else a bitmap (PNG).
pub fn render_with<T, P: AsRef<Path>>(
    layout: &Layout<'_, T>,
    canvas: CanvasSpec,
    out_path: P,
    opts: &RenderOptions,
) -> Result<()> {
    canvas.validate()?;
    let out_path = out_path.as_ref();
    let size = canvas_px(canvas.width, canvas.height);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        draw_layout(&root, layout, opts)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    } else {
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        draw_layout(&root, layout, opts)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    debug!("rendered {} balls to {}", layout.len(), out_path.display());
    Ok(())
}

/// Draw every placement onto `root`, whose pixel space is the layout canvas.
pub fn draw_layout<DB, T>(
    root: &DrawingArea<DB, Shift>,
    layout: &Layout<'_, T>,
    opts: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    for p in layout.placements() {
        let fill = rgb_color(opts.gradient.color(p.color_key)).filled();
        root.draw(&Circle::new((to_px(p.cx), to_px(p.cy)), radius_px(p.r), fill))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    if let Some(sel) = opts.highlight
        && let Some(p) = layout.placements().find(|p| p.index == sel)
    {
        let stroke = BLACK.stroke_width(opts.highlight_stroke);
        root.draw(&Circle::new((to_px(p.cx), to_px(p.cy)), radius_px(p.r), stroke))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
