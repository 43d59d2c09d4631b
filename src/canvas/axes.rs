//! A single plotting panel and the primitives drawn on it.

use super::bounds::Limits;
use super::legend::LegendLoc;
use crate::color::Rgb;
use crate::formatters::format_coord;
use crate::geometry::Vector2;
use std::fmt;

/// An arrow from `tail` to `tail + vector`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    /// Start point.
    pub tail: Vector2,
    /// Displacement from tail to tip.
    pub vector: Vector2,
    /// Arrow color.
    pub color: Rgb,
    /// Shaft width; `None` uses the renderer default.
    pub width: Option<f64>,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Legend label, if any.
    pub label: Option<String>,
}

impl Arrow {
    /// End point of the arrow.
    pub fn tip(&self) -> Vector2 {
        self.tail + self.vector
    }
}

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Continuous stroke.
    Solid,
    /// Alternating dashes and gaps.
    Dashed,
}

/// A connected sequence of line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Vertices in drawing order.
    pub points: Vec<Vector2>,
    /// Stroke pattern.
    pub style: LineStyle,
    /// Line color.
    pub color: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// A single scatter point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Point location.
    pub position: Vector2,
    /// Marker size.
    pub size: f64,
    /// Marker color.
    pub color: Rgb,
}

/// Direction of a reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant y.
    Horizontal,
    /// Constant x.
    Vertical,
}

/// An axis-parallel reference line such as `y = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    /// Direction of the line.
    pub orientation: Orientation,
    /// The constant coordinate.
    pub position: f64,
    /// Extent along the line.
    pub span: Limits,
    /// Line color.
    pub color: Rgb,
    /// Line width.
    pub width: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl ReferenceLine {
    /// Endpoints of the line.
    pub fn endpoints(&self) -> (Vector2, Vector2) {
        match self.orientation {
            Orientation::Horizontal => (
                Vector2::new(self.span.0, self.position),
                Vector2::new(self.span.1, self.position),
            ),
            Orientation::Vertical => (
                Vector2::new(self.position, self.span.0),
                Vector2::new(self.position, self.span.1),
            ),
        }
    }
}

/// Anything that can be drawn on a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// An arrow.
    Arrow(Arrow),
    /// A polyline.
    Line(Polyline),
    /// A scatter point.
    Scatter(Marker),
    /// A reference line.
    Reference(ReferenceLine),
}

/// Axis scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Each axis is scaled to fill the panel.
    #[default]
    Auto,
    /// One data unit has the same length on both axes.
    Equal,
}

/// A panel with its own limits, aspect, legend and primitives.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    title: Option<String>,
    xlim: Option<Limits>,
    ylim: Option<Limits>,
    aspect: Aspect,
    legend: Option<LegendLoc>,
    primitives: Vec<Primitive>,
}

impl Axes {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw an arrow.
    pub fn arrow(&mut self, arrow: Arrow) {
        self.primitives.push(Primitive::Arrow(arrow));
    }

    /// Draw a polyline.
    pub fn line(&mut self, points: Vec<Vector2>, style: LineStyle, color: Rgb, alpha: f64) {
        self.primitives.push(Primitive::Line(Polyline {
            points,
            style,
            color,
            alpha,
        }));
    }

    /// Draw a scatter point.
    pub fn scatter(&mut self, position: Vector2, size: f64, color: Rgb) {
        self.primitives.push(Primitive::Scatter(Marker {
            position,
            size,
            color,
        }));
    }

    /// Draw the horizontal line `y = position` across `span`.
    pub fn hline(&mut self, position: f64, span: Limits, color: Rgb, width: f64, alpha: f64) {
        self.reference(Orientation::Horizontal, position, span, color, width, alpha);
    }

    /// Draw the vertical line `x = position` across `span`.
    pub fn vline(&mut self, position: f64, span: Limits, color: Rgb, width: f64, alpha: f64) {
        self.reference(Orientation::Vertical, position, span, color, width, alpha);
    }

    fn reference(
        &mut self,
        orientation: Orientation,
        position: f64,
        span: Limits,
        color: Rgb,
        width: f64,
        alpha: f64,
    ) {
        self.primitives.push(Primitive::Reference(ReferenceLine {
            orientation,
            position,
            span,
            color,
            width,
            alpha,
        }));
    }

    /// Set the panel title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Panel title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Fix the x limits.
    pub fn set_xlim(&mut self, lim: Limits) {
        self.xlim = Some(lim);
    }

    /// Fix the y limits.
    pub fn set_ylim(&mut self, lim: Limits) {
        self.ylim = Some(lim);
    }

    /// Explicitly set x limits, if any.
    pub fn xlim(&self) -> Option<Limits> {
        self.xlim
    }

    /// Explicitly set y limits, if any.
    pub fn ylim(&self) -> Option<Limits> {
        self.ylim
    }

    /// Set axis scaling.
    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    /// Axis scaling.
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Show a legend at `loc`.
    pub fn legend(&mut self, loc: LegendLoc) {
        self.legend = Some(loc);
    }

    /// Legend location, if a legend is shown.
    pub fn legend_loc(&self) -> Option<LegendLoc> {
        self.legend
    }

    /// Everything drawn on this panel, in drawing order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Arrows drawn on this panel, in drawing order.
    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arrow(a) => Some(a),
            _ => None,
        })
    }

    /// Scatter points drawn on this panel, in drawing order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Scatter(m) => Some(m),
            _ => None,
        })
    }

    /// Labeled legend entries as `(label, color)`.
    pub fn legend_entries(&self) -> Vec<(&str, Rgb)> {
        self.arrows()
            .filter_map(|a| a.label.as_deref().map(|l| (l, a.color)))
            .filter(|(l, _)| !l.is_empty())
            .collect()
    }

    /// Limits to display: explicit limits where set, otherwise the data
    /// extent with a 5% margin.
    pub fn view_limits(&self) -> (Limits, Limits) {
        let (data_x, data_y) = self.data_extent();
        (
            self.xlim.unwrap_or_else(|| with_margin(data_x)),
            self.ylim.unwrap_or_else(|| with_margin(data_y)),
        )
    }

    fn data_extent(&self) -> (Limits, Limits) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        let mut include = |p: Vector2| {
            x = (x.0.min(p.x), x.1.max(p.x));
            y = (y.0.min(p.y), y.1.max(p.y));
        };
        for primitive in &self.primitives {
            match primitive {
                Primitive::Arrow(a) => {
                    include(a.tail);
                    include(a.tip());
                },
                Primitive::Line(l) => l.points.iter().copied().for_each(&mut include),
                Primitive::Scatter(m) => include(m.position),
                // Reference lines follow the view, they do not define it.
                Primitive::Reference(_) => {},
            }
        }
        (x, y)
    }
}

fn with_margin((lo, hi): Limits) -> Limits {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let margin = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    (lo - margin, hi + margin)
}

fn fmt_limits((lo, hi): Limits) -> String {
    format!("[{}, {}]", format_coord(lo), format_coord(hi))
}

fn fmt_point(p: Vector2) -> String {
    format!("({}, {})", format_coord(p.x), format_coord(p.y))
}

fn fmt_alpha(alpha: f64) -> String {
    format_coord(alpha)
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Arrow(a) => {
                write!(
                    f,
                    "arrow {} -> {} color {} alpha {}",
                    fmt_point(a.tail),
                    fmt_point(a.tip()),
                    a.color,
                    fmt_alpha(a.alpha)
                )?;
                if let Some(w) = a.width {
                    write!(f, " width {}", format_coord(w))?;
                }
                if let Some(label) = a.label.as_deref().filter(|l| !l.is_empty()) {
                    write!(f, " label \"{}\"", label)?;
                }
                Ok(())
            },
            Primitive::Line(l) => {
                let style = match l.style {
                    LineStyle::Solid => "line",
                    LineStyle::Dashed => "dashed",
                };
                let points: Vec<String> = l.points.iter().map(|p| fmt_point(*p)).collect();
                write!(
                    f,
                    "{} {} color {} alpha {}",
                    style,
                    points.join(" -> "),
                    l.color,
                    fmt_alpha(l.alpha)
                )
            },
            Primitive::Scatter(m) => write!(
                f,
                "point {} size {} color {}",
                fmt_point(m.position),
                format_coord(m.size),
                m.color
            ),
            Primitive::Reference(r) => {
                let (kind, axis) = match r.orientation {
                    Orientation::Horizontal => ("hline", "y"),
                    Orientation::Vertical => ("vline", "x"),
                };
                write!(
                    f,
                    "{} {}={} span {} color {}",
                    kind,
                    axis,
                    format_coord(r.position),
                    fmt_limits(r.span),
                    r.color
                )
            },
        }
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref title) = self.title {
            writeln!(f, "    title \"{}\"", title)?;
        }
        if let Some(xlim) = self.xlim {
            writeln!(f, "    xlim {}", fmt_limits(xlim))?;
        }
        if let Some(ylim) = self.ylim {
            writeln!(f, "    ylim {}", fmt_limits(ylim))?;
        }
        let aspect = match self.aspect {
            Aspect::Auto => "auto",
            Aspect::Equal => "equal",
        };
        writeln!(f, "    aspect {}", aspect)?;
        for primitive in &self.primitives {
            writeln!(f, "    {}", primitive)?;
        }
        if let Some(loc) = self.legend {
            writeln!(f, "    legend {}", loc)?;
        }
        Ok(())
    }
}
