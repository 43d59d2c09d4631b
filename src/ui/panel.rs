//! Panel rendering: turns an [`Axes`] into braille line art.

use super::ThemeColors;
use crate::canvas::{Arrow, Aspect, Axes, LegendLoc, Limits, LineStyle, Primitive};
use crate::config::TerminalLayoutConfig;
use crate::formatters::format_axis_label;
use crate::geometry::Vector2;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker as Symbol,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas as Surface, Context, Line as Segment, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shaft width that draws the default arrowhead size.
const DEFAULT_SHAFT_WIDTH: f64 = 0.005;

/// Data-to-screen mapping of a panel's plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) x: Limits,
    pub(crate) y: Limits,
    /// Data units per physical unit (one cell width) horizontally.
    sx: f64,
    /// Data units per physical unit (one cell width) vertically.
    sy: f64,
}

impl Viewport {
    /// Fit `x`/`y` limits into `cols` x `rows` cells. With equal aspect the
    /// shorter span is widened around its center so one data unit has the
    /// same on-screen length on both axes.
    pub(crate) fn fit(
        x: Limits,
        y: Limits,
        aspect: Aspect,
        cols: u16,
        rows: u16,
        cell_aspect: f64,
    ) -> Self {
        let width = f64::from(cols.max(1));
        let height = f64::from(rows.max(1)) * cell_aspect;
        let (x, y) = (nonempty(x), nonempty(y));
        let (x, y) = match aspect {
            Aspect::Auto => (x, y),
            Aspect::Equal => {
                let scale = ((x.1 - x.0) / width).max((y.1 - y.0) / height);
                (recenter(x, scale * width), recenter(y, scale * height))
            },
        };
        Self {
            x,
            y,
            sx: (x.1 - x.0) / width,
            sy: (y.1 - y.0) / height,
        }
    }

    /// Segments making up an arrow: the shaft and two barbs at the tip.
    pub(crate) fn arrow_segments(
        &self,
        arrow: &Arrow,
        cfg: &TerminalLayoutConfig,
    ) -> Vec<(Vector2, Vector2)> {
        let tail = arrow.tail;
        let tip = arrow.tip();
        let mut segments = vec![(tail, tip)];

        // Work in physical units so barbs look right under unequal scaling.
        let dx = arrow.vector.x / self.sx;
        let dy = arrow.vector.y / self.sy;
        let length = dx.hypot(dy);
        if length <= f64::EPSILON {
            return segments;
        }

        let span = (self.x.1 - self.x.0) / self.sx;
        let span = span.min((self.y.1 - self.y.0) / self.sy);
        let width_scale = arrow.width.map_or(1.0, |w| w / DEFAULT_SHAFT_WIDTH);
        let barb = (cfg.arrowhead_fraction * span * width_scale).min(length * 0.5);

        let back = (-dx / length, -dy / length);
        let angle = cfg.arrowhead_angle_deg.to_radians();
        for side in [angle, -angle] {
            let (s, c) = side.sin_cos();
            let bx = (back.0 * c - back.1 * s) * barb;
            let by = (back.0 * s + back.1 * c) * barb;
            segments.push((tip, Vector2::new(tip.x + bx * self.sx, tip.y + by * self.sy)));
        }
        segments
    }
}

fn nonempty((lo, hi): Limits) -> Limits {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

fn recenter((lo, hi): Limits, span: f64) -> Limits {
    let mid = (lo + hi) / 2.0;
    (mid - span / 2.0, mid + span / 2.0)
}

/// Split a polyline into `count` dashes per segment.
pub(crate) fn dash_segments(points: &[Vector2], count: usize) -> Vec<(Vector2, Vector2)> {
    let count = count.max(1);
    let mut dashes = Vec::new();
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let step = (b - a) * (1.0 / count as f64);
        for i in 0..count {
            let start = a + step * i as f64;
            dashes.push((start, start + step * 0.5));
        }
    }
    dashes
}

/// Draw one panel into `area`.
pub(crate) fn draw_panel(
    f: &mut Frame<'_>,
    area: Rect,
    axes: &Axes,
    colors: &ThemeColors,
    cfg: &TerminalLayoutConfig,
) {
    let title = axes
        .title()
        .map(|t| format!(" {} ", t))
        .unwrap_or_default();
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(colors.heading)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let (x, y) = axes.view_limits();
    let view = Viewport::fit(x, y, axes.aspect(), inner.width, inner.height, cfg.cell_aspect);

    let range_label = format!(
        " x [{}, {}]  y [{}, {}] ",
        format_axis_label(view.x.0),
        format_axis_label(view.x.1),
        format_axis_label(view.y.0),
        format_axis_label(view.y.1)
    );
    let block = block.title_bottom(Line::from(Span::styled(
        range_label,
        Style::default().fg(colors.text),
    )));

    let surface = Surface::default()
        .block(block)
        .background_color(colors.bg)
        .marker(Symbol::Braille)
        .x_bounds([view.x.0, view.x.1])
        .y_bounds([view.y.0, view.y.1])
        .paint(|ctx| paint(ctx, axes, &view, colors, cfg));

    f.render_widget(surface, area);

    if axes.legend_loc().is_some() {
        draw_legend(f, inner, axes, &view, colors, cfg);
    }
}

fn paint(
    ctx: &mut Context<'_>,
    axes: &Axes,
    view: &Viewport,
    colors: &ThemeColors,
    cfg: &TerminalLayoutConfig,
) {
    let segment = |ctx: &mut Context<'_>, (a, b): (Vector2, Vector2), color| {
        ctx.draw(&Segment {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            color,
        });
    };

    for primitive in axes.primitives() {
        match primitive {
            Primitive::Reference(r) => {
                segment(ctx, r.endpoints(), colors.plot_color(r.color, r.alpha));
            },
            Primitive::Line(l) => {
                let color = colors.plot_color(l.color, l.alpha);
                match l.style {
                    LineStyle::Solid => {
                        for pair in l.points.windows(2) {
                            segment(ctx, (pair[0], pair[1]), color);
                        }
                    },
                    LineStyle::Dashed => {
                        for dash in dash_segments(&l.points, cfg.dash_count) {
                            segment(ctx, dash, color);
                        }
                    },
                }
            },
            Primitive::Arrow(a) => {
                let color = colors.plot_color(a.color, a.alpha);
                for s in view.arrow_segments(a, cfg) {
                    segment(ctx, s, color);
                }
            },
            Primitive::Scatter(m) => {
                ctx.draw(&Points {
                    coords: &[(m.position.x, m.position.y)],
                    color: colors.plot_color(m.color, 1.0),
                });
            },
        }
    }
}

fn draw_legend(
    f: &mut Frame<'_>,
    inner: Rect,
    axes: &Axes,
    view: &Viewport,
    colors: &ThemeColors,
    cfg: &TerminalLayoutConfig,
) {
    let entries = axes.legend_entries();
    if entries.is_empty() {
        return;
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0) as u16;
    // "── " swatch, label, padding and borders
    let width = (label_width + 3 + cfg.legend_padding * 2 + 2).min(inner.width);
    let height = (entries.len() as u16 + 2).min(inner.height);

    let loc = axes.legend_loc().unwrap_or_default();
    let (fx, fy) = loc.anchor().unwrap_or_else(|| best_anchor(axes, view));
    let free_x = f64::from(inner.width.saturating_sub(width));
    let free_y = f64::from(inner.height.saturating_sub(height));
    let rect = Rect {
        x: inner.x + (free_x * fx).round() as u16,
        // rows grow downward
        y: inner.y + (free_y * (1.0 - fy)).round() as u16,
        width,
        height,
    };

    let pad = " ".repeat(usize::from(cfg.legend_padding));
    let lines: Vec<Line<'_>> = entries
        .iter()
        .map(|(label, color)| {
            Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled("── ", Style::default().fg(colors.plot_color(*color, 1.0))),
                Span::styled(label.to_string(), Style::default().fg(colors.text)),
            ])
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        ),
        rect,
    );
}

/// Corner whose quadrant of the view holds the fewest arrow tips and points.
pub(crate) fn best_anchor(axes: &Axes, view: &Viewport) -> (f64, f64) {
    let mid = ((view.x.0 + view.x.1) / 2.0, (view.y.0 + view.y.1) / 2.0);
    let mut counts = [0usize; 4];
    let mut count = |p: Vector2| {
        let right = usize::from(p.x >= mid.0);
        let top = usize::from(p.y >= mid.1);
        counts[top * 2 + right] += 1;
    };
    for primitive in axes.primitives() {
        match primitive {
            Primitive::Arrow(a) => count(a.tip()),
            Primitive::Scatter(m) => count(m.position),
            Primitive::Line(l) => l.points.iter().copied().for_each(&mut count),
            Primitive::Reference(_) => {},
        }
    }

    // Preference order on ties: upper right, upper left, lower left, lower right.
    [
        LegendLoc::UpperRight,
        LegendLoc::UpperLeft,
        LegendLoc::LowerLeft,
        LegendLoc::LowerRight,
    ]
    .into_iter()
    .filter_map(|loc| loc.anchor())
    .min_by_key(|&(fx, fy)| counts[(fy as usize) * 2 + fx as usize])
    .unwrap_or((1.0, 1.0))
}
