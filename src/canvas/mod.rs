//! Drawing surface.
//!
//! A [`Canvas`] owns a list of figures and tracks which one is current. Each
//! [`Figure`] holds one or more side-by-side panels ([`Axes`]) and tracks
//! which panel is current. Plotting operations take the canvas by `&mut`,
//! so all access to the surface is explicit and serialized by the borrow
//! checker.

mod axes;
mod bounds;
mod legend;

pub use axes::{
    Arrow, Aspect, Axes, LineStyle, Marker, Orientation, Polyline, Primitive, ReferenceLine,
};
pub use bounds::{AxisBounds, Limits};
pub use legend::LegendLoc;

use crate::error::{PlotvecError, Result};
use std::fmt;

/// A figure made of one or more panels laid out left to right.
#[derive(Debug, Clone)]
pub struct Figure {
    panels: Vec<Axes>,
    current: usize,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create a figure with a single empty panel.
    pub fn new() -> Self {
        Self {
            panels: vec![Axes::new()],
            current: 0,
        }
    }

    /// Replace the panels with `count` empty side-by-side panels and make
    /// the first one current.
    pub fn subplots(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(PlotvecError::invalid_argument("a figure needs at least one panel"));
        }
        self.panels = (0..count).map(|_| Axes::new()).collect();
        self.current = 0;
        Ok(())
    }

    /// Make panel `index` current.
    pub fn select_panel(&mut self, index: usize) -> Result<()> {
        if index >= self.panels.len() {
            return Err(PlotvecError::invalid_argument(format!(
                "panel {} out of range (figure has {})",
                index,
                self.panels.len()
            )));
        }
        self.current = index;
        Ok(())
    }

    /// The current panel.
    pub fn current_axes(&self) -> &Axes {
        &self.panels[self.current]
    }

    /// The current panel, mutably.
    pub fn current_axes_mut(&mut self) -> &mut Axes {
        &mut self.panels[self.current]
    }

    /// All panels, left to right.
    pub fn panels(&self) -> &[Axes] {
        &self.panels
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, panel) in self.panels.iter().enumerate() {
            writeln!(f, "  panel {}", i + 1)?;
            write!(f, "{}", panel)?;
        }
        Ok(())
    }
}

/// The drawing surface: every figure created so far plus the current one.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    figures: Vec<Figure>,
    current: Option<usize>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new figure and make it current.
    pub fn new_figure(&mut self) -> &mut Figure {
        self.figures.push(Figure::new());
        let index = self.figures.len() - 1;
        self.current = Some(index);
        tracing::debug!("New figure {}", index + 1);
        &mut self.figures[index]
    }

    /// The current figure, creating one if the canvas is empty.
    pub fn current_figure_mut(&mut self) -> &mut Figure {
        match self.current {
            Some(index) => &mut self.figures[index],
            None => self.new_figure(),
        }
    }

    /// The current figure, if any.
    pub fn current_figure(&self) -> Option<&Figure> {
        self.current.map(|index| &self.figures[index])
    }

    /// The current panel of the current figure, creating a figure if needed.
    pub fn current_axes_mut(&mut self) -> &mut Axes {
        self.current_figure_mut().current_axes_mut()
    }

    /// All figures in creation order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Number of figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether no figure has been created.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, figure) in self.figures.iter().enumerate() {
            writeln!(f, "figure {}", i + 1)?;
            write!(f, "{}", figure)?;
        }
        Ok(())
    }
}
