//! Running axis-bound accumulator.

use crate::geometry::Vector2;

/// Axis limits as `(min, max)`.
pub type Limits = (f64, f64);

/// Smallest box containing every point plotted so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Smallest x seen.
    pub xmin: f64,
    /// Largest x seen.
    pub xmax: f64,
    /// Smallest y seen.
    pub ymin: f64,
    /// Largest y seen.
    pub ymax: f64,
}

impl AxisBounds {
    /// Bounds containing only the origin.
    pub fn at_origin() -> Self {
        Self {
            xmin: 0.0,
            xmax: 0.0,
            ymin: 0.0,
            ymax: 0.0,
        }
    }

    /// Recover bounds from limits that were padded by `padding` on every side.
    ///
    /// Assumes the limits were produced by [`AxisBounds::limits`] with the same
    /// padding. Limits changed by anything else are taken at face value minus
    /// the padding.
    pub fn from_padded_limits(xlim: Limits, ylim: Limits, padding: f64) -> Self {
        Self {
            xmin: xlim.0 + padding,
            xmax: xlim.1 - padding,
            ymin: ylim.0 + padding,
            ymax: ylim.1 - padding,
        }
    }

    /// Widen the bounds to contain `p`.
    pub fn include(&mut self, p: Vector2) {
        self.xmin = self.xmin.min(p.x);
        self.xmax = self.xmax.max(p.x);
        self.ymin = self.ymin.min(p.y);
        self.ymax = self.ymax.max(p.y);
    }

    /// Padded limits, never tighter than `[-min_extent, min_extent]`.
    pub fn limits(&self, padding: f64, min_extent: f64) -> (Limits, Limits) {
        (
            (
                (-min_extent).min(self.xmin - padding),
                min_extent.max(self.xmax + padding),
            ),
            (
                (-min_extent).min(self.ymin - padding),
                min_extent.max(self.ymax + padding),
            ),
        )
    }
}
