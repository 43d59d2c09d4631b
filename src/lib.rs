//! Plotvec - plot 2-d vectors as arrows and visualize 2x2 linear transforms.
//!
//! Plotvec is a set of small teaching utilities for introductory linear
//! algebra. Every operation records drawing calls on an explicit [`Canvas`];
//! the `plotvec` binary renders a canvas in the terminal.
//!
//! # Features
//!
//! - Vectors drawn from a shared tail or chained head-to-tail
//! - Optional dashed sum arrow
//! - Cyclic or explicit colors, per-vector transparency and legend labels
//! - Unit-vector rings and point lattices pushed through a 2x2 matrix
//! - Named color gradients for coloring samples by angle
//!
//! # Example
//!
//! ```
//! use plotvec::{plotvec, Canvas, Vector2, VecPlotOptions};
//!
//! let mut canvas = Canvas::new();
//! let options = VecPlotOptions { chain: true, plotsum: true, ..Default::default() };
//! plotvec(&mut canvas, &[Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)], &options)?;
//!
//! let ax = canvas.current_figure().unwrap().current_axes();
//! assert_eq!(ax.arrows().nth(1).unwrap().tail, Vector2::new(1.0, 0.0));
//! # Ok::<(), plotvec::PlotvecError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod canvas;
pub mod clipboard;
pub mod color;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod formatters;
pub mod geometry;
pub mod transforms;
pub mod ui;
pub mod vector_plot;

pub use canvas::{Canvas, LegendLoc};
pub use color::{ColorSpec, Rgb};
pub use colormaps::Colormap;
pub use error::{PlotvecError, Result};
pub use geometry::Vector2;
pub use transforms::{plot_field, transform_unit_vecs, FieldOptions, UnitVecOptions};
pub use vector_plot::{plotvec, plotvec_rect, Alpha, VecPlotOptions};
