//! pallomeri
//!
//! Lay out data points as balls grouped into value-range bins, packed densely inside each
//! bin without overlap. Pairs with the `pallomeri` CLI.
//!
//! ### Features
//! - Equal-width value bins; out-of-range values are clamped into the edge bins, never dropped
//! - One shared slot count, the minimum that fits the fullest bin into the canvas height
//! - Deterministic column-major packing, stacked from the canvas bottom
//! - Continuous or quantized color keys, with stock gradients
//! - SVG/PNG rendering, CSV/JSON export of geometry, per-bin summary statistics
//!
//! ### Example
//! ```no_run
//! use pallomeri::{LayoutConfig, layout};
//!
//! let scores = vec![0.1, 0.4, 0.9, 0.95];
//! let config = LayoutConfig { bins: 2, ..Default::default() };
//! let balls = layout(&scores, |s| *s, &config)?;
//! for p in balls.placements() {
//!     println!("{} at ({:.1}, {:.1}) r={:.1}", p.item, p.cx, p.cy, p.r);
//! }
//! pallomeri::viz::render(&balls, config.canvas, "balls.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod stats;
pub mod storage;
pub mod tooltip;
pub mod viz;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::layout;
pub use models::{BinLayout, BinSpec, CanvasSpec, Layout, Placement, ValueRange};
