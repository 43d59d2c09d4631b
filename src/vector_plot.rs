//! Plot 2-d vectors as arrows.
//!
//! Vectors can share a tail or be chained head-to-tail, which together with
//! the optional sum arrow illustrates vector addition. Colors follow the
//! `C0`..`C9` cycle unless given explicitly; `color_offset` shifts the cycle
//! so several calls on one figure can use distinct colors.

use crate::canvas::{Arrow, Aspect, AxisBounds, Canvas, LegendLoc, LineStyle};
use crate::color::{ColorSpec, Rgb, CYCLE};
use crate::config::PlotStyle;
use crate::error::{PlotvecError, Result};
use crate::geometry::Vector2;

/// Opacity of the plotted arrows.
#[derive(Debug, Clone, PartialEq)]
pub enum Alpha {
    /// One value for every arrow, including the sum arrow.
    Scalar(f64),
    /// One value per vector, plus one for the sum arrow when it is drawn.
    PerVector(Vec<f64>),
}

impl Default for Alpha {
    fn default() -> Self {
        Self::Scalar(1.0)
    }
}

/// Options for [`plotvec`].
#[derive(Debug, Clone)]
pub struct VecPlotOptions {
    /// Tail of the first arrow.
    pub tail: Vector2,
    /// Place each tail at the head of the previous vector.
    pub chain: bool,
    /// One legend label per vector; enables the legend.
    pub labels: Option<Vec<String>>,
    /// One color per vector, plus one for the sum arrow when it is drawn.
    pub colors: Option<Vec<ColorSpec>>,
    /// Shift of the generated color cycle; ignored when `colors` is given.
    pub color_offset: usize,
    /// Arrow opacity.
    pub alpha: Alpha,
    /// Arrow shaft width; `None` uses the renderer default.
    pub width: Option<f64>,
    /// Force equal scaling of both axes.
    pub square_aspect_ratio: bool,
    /// Draw the sum of all vectors as a dashed arrow from the first tail.
    pub plotsum: bool,
    /// Start a new figure instead of drawing on the current panel.
    pub newfig: bool,
    /// Legend placement.
    pub legendloc: LegendLoc,
}

impl Default for VecPlotOptions {
    fn default() -> Self {
        Self {
            tail: Vector2::ZERO,
            chain: false,
            labels: None,
            colors: None,
            color_offset: 0,
            alpha: Alpha::default(),
            width: None,
            square_aspect_ratio: true,
            plotsum: false,
            newfig: true,
            legendloc: LegendLoc::Best,
        }
    }
}

/// Per-arrow styling resolved before anything is drawn.
#[derive(Debug)]
struct ResolvedStyle {
    colors: Vec<Rgb>,
    alphas: Vec<f64>,
    labels: Vec<Option<String>>,
}

impl VecPlotOptions {
    /// Number of color/alpha slots: one per vector plus the sum arrow.
    fn slots(&self, count: usize) -> usize {
        count + usize::from(self.plotsum)
    }

    fn resolve(&self, count: usize) -> Result<ResolvedStyle> {
        if count == 0 {
            return Err(PlotvecError::invalid_argument("at least one vector is required"));
        }
        let slots = self.slots(count);

        let colors = match &self.colors {
            Some(colors) if colors.len() != slots => {
                return Err(PlotvecError::length_mismatch("colors", slots, colors.len()));
            },
            Some(colors) => colors.iter().map(|c| c.rgb()).collect(),
            None => {
                let offset = self.color_offset % CYCLE.len();
                (0..slots)
                    .map(|i| ColorSpec::Cycle((i + offset) % CYCLE.len()).rgb())
                    .collect()
            },
        };

        let alphas = match &self.alpha {
            Alpha::Scalar(a) => vec![*a; slots],
            Alpha::PerVector(alphas) if alphas.len() != slots => {
                return Err(PlotvecError::length_mismatch("alpha", slots, alphas.len()));
            },
            Alpha::PerVector(alphas) => alphas.clone(),
        };

        let labels = match &self.labels {
            Some(labels) if labels.len() != count => {
                return Err(PlotvecError::length_mismatch("labels", count, labels.len()));
            },
            Some(labels) => labels.iter().cloned().map(Some).collect(),
            None => vec![None; count],
        };

        Ok(ResolvedStyle {
            colors,
            alphas,
            labels,
        })
    }
}

/// Plot a sequence of 2-d vectors as arrows.
///
/// All styling lists are checked against the number of vectors before
/// anything is drawn, so a failed call leaves the canvas untouched.
///
/// With `newfig` unset, drawing continues on the current panel and its
/// limits are widened as needed. The previous limits are assumed to carry
/// the 1-unit padding this function adds; limits set by other code are
/// reinterpreted under the same assumption.
pub fn plotvec(canvas: &mut Canvas, vectors: &[Vector2], options: &VecPlotOptions) -> Result<()> {
    plotvec_styled(canvas, vectors, options, &PlotStyle::default())
}

/// Like [`plotvec`], but never forces a square aspect ratio.
pub fn plotvec_rect(
    canvas: &mut Canvas,
    vectors: &[Vector2],
    options: &VecPlotOptions,
) -> Result<()> {
    let options = VecPlotOptions {
        square_aspect_ratio: false,
        ..options.clone()
    };
    plotvec(canvas, vectors, &options)
}

/// [`plotvec`] with explicit styling constants.
pub fn plotvec_styled(
    canvas: &mut Canvas,
    vectors: &[Vector2],
    options: &VecPlotOptions,
    style: &PlotStyle,
) -> Result<()> {
    let resolved = options.resolve(vectors.len())?;

    tracing::debug!(
        "Plotting {} vectors (chain={}, plotsum={}, newfig={})",
        vectors.len(),
        options.chain,
        options.plotsum,
        options.newfig
    );

    let ax = if options.newfig {
        canvas.new_figure().current_axes_mut()
    } else {
        canvas.current_axes_mut()
    };

    let mut bounds = match (ax.xlim(), ax.ylim()) {
        (Some(xlim), Some(ylim)) if !options.newfig => {
            AxisBounds::from_padded_limits(xlim, ylim, style.padding)
        },
        _ => AxisBounds::at_origin(),
    };

    let start = options.tail;
    let mut tail = start;
    bounds.include(tail);

    for (i, vector) in vectors.iter().enumerate() {
        ax.arrow(Arrow {
            tail,
            vector: *vector,
            color: resolved.colors[i],
            width: options.width,
            alpha: resolved.alphas[i],
            label: resolved.labels[i].clone(),
        });
        bounds.include(tail + *vector);
        if options.chain {
            tail += *vector;
        }
    }

    let end = if options.chain {
        tail
    } else {
        vectors.iter().fold(start, |acc, v| acc + *v)
    };
    if options.plotsum {
        bounds.include(end);
    }

    let (xlim, ylim) = bounds.limits(style.padding, style.min_extent);
    ax.set_xlim(xlim);
    ax.set_ylim(ylim);
    ax.hline(0.0, xlim, Rgb::BLACK, style.reference_width, style.reference_alpha);
    ax.vline(0.0, ylim, Rgb::BLACK, style.reference_width, style.reference_alpha);

    ax.set_aspect(if options.square_aspect_ratio {
        Aspect::Equal
    } else {
        Aspect::Auto
    });

    if options.plotsum {
        let total = end - start;
        let lead_end = start + total * style.sum_lead_fraction;
        let color = resolved.colors[vectors.len()];
        let alpha = resolved.alphas[vectors.len()];
        ax.line(vec![start, lead_end], LineStyle::Dashed, color, alpha);
        ax.arrow(Arrow {
            tail: lead_end,
            vector: end - lead_end,
            color,
            width: options.width,
            alpha,
            label: None,
        });
    }

    if options.labels.is_some() {
        ax.legend(options.legendloc);
    }

    Ok(())
}
