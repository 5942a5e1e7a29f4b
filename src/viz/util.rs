//! Conversions between layout geometry and plotters' integer pixel space.

use crate::color::Rgb;
use plotters::prelude::*;

pub fn rgb_color(c: Rgb) -> RGBColor {
    let c = c.to_rgb8();
    RGBColor(c.r, c.g, c.b)
}

/// Round a canvas coordinate to the nearest pixel.
#[inline]
pub fn to_px(v: f64) -> i32 {
    v.round() as i32
}

/// Radius in whole pixels; any visible ball keeps at least one pixel.
#[inline]
pub fn radius_px(r: f64) -> i32 {
    if r <= 0.0 { 0 } else { (r.round() as i32).max(1) }
}

/// Output image size for a canvas, at least one pixel each way.
pub fn canvas_px(width: f64, height: f64) -> (u32, u32) {
    let px = |v: f64| (v.round() as u32).max(1);
    (px(width), px(height))
}
