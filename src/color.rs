//! Color keys and the gradients that turn them into display colors.
//!
//! The layout core only produces a scalar key in [0, 1] per ball. Mapping that key to a
//! color is the renderer's job; the gradients here are the stock mappings it can use.

/// Floating point color, channels nominally in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_rgb8(self) -> Rgb8 {
        let q = |c: f64| (clamp01(c) * 255.0).round() as u8;
        Rgb8 {
            r: q(self.r),
            g: q(self.g),
            b: q(self.b),
        }
    }

    /// CSS `rgb(r%,g%,b%)` string with each channel clamped to [0, 100]%.
    pub fn css(self) -> String {
        let f = |c: f64| format!("{}%", 100.0 * clamp01(c));
        format!("rgb({},{},{})", f(self.r), f(self.g), f(self.b))
    }

    pub fn hex(self) -> String {
        let c = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
    }
}

/// Red at 0, yellow at 0.5, green at 1.
pub fn red_green_gradient(v: f64) -> Rgb {
    Rgb {
        r: 1.0 - (v - 0.5).max(0.0) * 2.0,
        g: (v * 2.0).min(1.0),
        b: 0.0,
    }
}

pub fn grayscale_gradient(v: f64) -> Rgb {
    let l = clamp01(v);
    Rgb { r: l, g: l, b: l }
}

/// Stock color mappings `key -> Rgb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gradient {
    #[default]
    RedGreen,
    Grayscale,
}

impl Gradient {
    pub fn color(self, key: f64) -> Rgb {
        match self {
            Gradient::RedGreen => red_green_gradient(key),
            Gradient::Grayscale => grayscale_gradient(key),
        }
    }
}

/// How a normalized value becomes a color key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorStep {
    Continuous,
    /// `n >= 2` discrete steps, evenly spread over [0, 1].
    Quantized(usize),
}

impl ColorStep {
    pub fn from_bins(color_bins: Option<usize>) -> Self {
        match color_bins {
            Some(n) if n >= 2 => ColorStep::Quantized(n),
            _ => ColorStep::Continuous,
        }
    }

    /// Map `t` in [0, 1] to a key in [0, 1].
    pub fn key(self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            ColorStep::Continuous => t,
            ColorStep::Quantized(n) => {
                let step = (t * n as f64).floor().min((n - 1) as f64);
                step / (n - 1) as f64
            }
        }
    }
}

fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
