//! Visualize 2x2 linear transforms.
//!
//! Both entry points sample a set of input points, color each by its angle
//! from the origin, apply the matrix and draw inputs and outputs side by
//! side so corresponding samples share a color.

use crate::canvas::{Aspect, Canvas};
use crate::color::{ColorSpec, Rgb};
use crate::colormaps::Colormap;
use crate::config::PlotStyle;
use crate::error::{PlotvecError, Result};
use crate::geometry::{apply, check_matrix, is_identity, Vector2};
use crate::vector_plot::{plotvec_styled, VecPlotOptions};
use ndarray::{Array1, Array2};
use std::f64::consts::TAU;

/// Options for [`transform_unit_vecs`].
#[derive(Debug, Clone)]
pub struct UnitVecOptions {
    /// Number of unit vectors around the circle.
    pub num_vectors: usize,
    /// Draw the input vectors in a panel left of the outputs.
    pub plot_inputs: bool,
    /// Name of the gradient used to color vectors by angle.
    pub colormap: String,
}

impl Default for UnitVecOptions {
    fn default() -> Self {
        Self {
            num_vectors: 16,
            plot_inputs: true,
            colormap: Colormap::Plasma.name().to_string(),
        }
    }
}

/// Options for [`plot_field`].
#[derive(Debug, Clone)]
pub struct FieldOptions {
    /// Half-width of the square input field.
    pub field_width: f64,
    /// Distance between neighboring lattice points.
    pub point_spacing: f64,
    /// Keep the output view at the input field's extent.
    pub preserve_axes: bool,
    /// Draw the input lattice in a panel left of the outputs. Ignored for
    /// the identity matrix.
    pub plot_inputs: bool,
    /// Name of the gradient used to color points by angle.
    pub colormap: String,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            field_width: 3.0,
            point_spacing: 0.5,
            preserve_axes: true,
            plot_inputs: true,
            colormap: Colormap::Plasma.name().to_string(),
        }
    }
}

/// `n` unit vectors evenly spaced by angle, starting on the positive x-axis.
pub fn unit_vectors(n: usize) -> Vec<Vector2> {
    (0..n)
        .map(|i| Vector2::from_angle(TAU * i as f64 / n as f64))
        .collect()
}

/// Square lattice covering `[-width, width]` in both axes, row by row.
///
/// Coordinates follow `arange(-width, width + spacing, spacing)`, so the
/// last row and column may overshoot `width` when it is not a multiple of
/// `spacing`.
pub fn lattice(width: f64, spacing: f64) -> Result<Vec<Vector2>> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(PlotvecError::invalid_argument(format!(
            "point spacing must be positive, got {}",
            spacing
        )));
    }
    if !width.is_finite() || width < 0.0 {
        return Err(PlotvecError::invalid_argument(format!(
            "field width must be non-negative, got {}",
            width
        )));
    }
    let coords = Array1::range(-width, width + spacing, spacing);
    Ok(coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| Vector2::new(x, y)))
        .collect())
}

/// Plot a ring of unit vectors and their images under `matrix`.
///
/// Input vectors go in a left panel fixed to `[-1.1, 1.1]`; outputs in a
/// right panel fixed to `[-4, 4]`. Vector `i` of `n` is colored
/// `colormap(i / n)` in both panels.
pub fn transform_unit_vecs(
    canvas: &mut Canvas,
    matrix: &Array2<f64>,
    options: &UnitVecOptions,
) -> Result<()> {
    check_matrix(matrix)?;
    let cmap = Colormap::from_name(&options.colormap)?;
    if options.num_vectors == 0 {
        return Err(PlotvecError::invalid_argument("num_vectors must be at least 1"));
    }
    let style = PlotStyle::default();

    let inputs = unit_vectors(options.num_vectors);
    let outputs: Vec<Vector2> = inputs.iter().map(|v| apply(matrix, *v)).collect();
    let colors: Vec<ColorSpec> = (0..options.num_vectors)
        .map(|i| ColorSpec::Rgb(cmap.color(i as f64 / options.num_vectors as f64)))
        .collect();

    tracing::debug!(
        "Transforming {} unit vectors with colormap {}",
        options.num_vectors,
        cmap.name()
    );

    let figure = canvas.new_figure();
    figure.subplots(if options.plot_inputs { 2 } else { 1 })?;

    let arrows = VecPlotOptions {
        colors: Some(colors),
        newfig: false,
        ..Default::default()
    };

    if options.plot_inputs {
        plotvec_styled(canvas, &inputs, &arrows, &style)?;
        let ax = canvas.current_axes_mut();
        let extent = style.ring_input_extent;
        ax.set_xlim((-extent, extent));
        ax.set_ylim((-extent, extent));
        ax.set_title("Input vectors");
        canvas.current_figure_mut().select_panel(1)?;
    }

    plotvec_styled(canvas, &outputs, &arrows, &style)?;
    let ax = canvas.current_axes_mut();
    let extent = style.ring_output_extent;
    ax.set_xlim((-extent, extent));
    ax.set_ylim((-extent, extent));
    ax.hline(
        0.0,
        (-extent, extent),
        Rgb::BLACK,
        style.reference_width,
        style.reference_alpha,
    );
    ax.set_title("Output vectors");

    Ok(())
}

/// Plot the images of a square lattice of points under `matrix`.
///
/// Each point is colored by its angle from the origin. For the identity
/// matrix the input panel is skipped since it would match the output.
pub fn plot_field(canvas: &mut Canvas, matrix: &Array2<f64>, options: &FieldOptions) -> Result<()> {
    check_matrix(matrix)?;
    let cmap = Colormap::from_name(&options.colormap)?;
    let points = lattice(options.field_width, options.point_spacing)?;
    let style = PlotStyle::default();

    let show_inputs = options.plot_inputs && !is_identity(matrix);
    tracing::debug!(
        "Transforming {} lattice points (inputs shown: {})",
        points.len(),
        show_inputs
    );

    let figure = canvas.new_figure();
    figure.subplots(if show_inputs { 2 } else { 1 })?;

    let colors: Vec<Rgb> = points
        .iter()
        .map(|p| cmap.color(p.angle() / TAU))
        .collect();
    let w = options.field_width;

    if show_inputs {
        let ax = figure.current_axes_mut();
        for (p, color) in points.iter().zip(&colors) {
            ax.scatter(*p, style.scatter_size, *color);
        }
        ax.set_aspect(Aspect::Equal);
        ax.set_xlim((-w, w));
        ax.set_ylim((-w, w));
        ax.set_title("Input points");
        figure.select_panel(1)?;
    }

    let ax = figure.current_axes_mut();
    for (p, color) in points.iter().zip(&colors) {
        ax.scatter(apply(matrix, *p), style.scatter_size, *color);
    }
    ax.set_aspect(Aspect::Equal);
    if options.preserve_axes {
        ax.set_xlim((-w, w));
        ax.set_ylim((-w, w));
    }
    ax.set_title("Output points");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Figure;
    use ndarray::array;

    fn last_figure(canvas: &Canvas) -> &Figure {
        canvas.current_figure().unwrap()
    }

    #[test]
    fn unit_vectors_are_unit_and_evenly_spaced() {
        for n in [1, 3, 7, 16] {
            let vs = unit_vectors(n);
            assert_eq!(vs.len(), n);
            for (i, v) in vs.iter().enumerate() {
                assert!((v.norm() - 1.0).abs() < 1e-12);
                let expected = TAU * i as f64 / n as f64;
                assert!((v.angle() - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn identity_ring_matches_inputs() {
        let mut canvas = Canvas::new();
        let options = UnitVecOptions {
            num_vectors: 4,
            ..Default::default()
        };
        transform_unit_vecs(&mut canvas, &Array2::eye(2), &options).unwrap();

        let figure = last_figure(&canvas);
        assert_eq!(figure.panels().len(), 2);
        let inputs: Vec<_> = figure.panels()[0].arrows().map(|a| a.vector).collect();
        let outputs: Vec<_> = figure.panels()[1].arrows().map(|a| a.vector).collect();
        assert_eq!(inputs, outputs);

        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (v, (x, y)) in inputs.iter().zip(expected) {
            assert!((v.x - x).abs() < 1e-12 && (v.y - y).abs() < 1e-12);
        }
    }

    #[test]
    fn ring_panels_and_colors() {
        let mut canvas = Canvas::new();
        let m = array![[2.0, 0.0], [0.0, 0.5]];
        let options = UnitVecOptions {
            num_vectors: 8,
            colormap: "viridis".into(),
            ..Default::default()
        };
        transform_unit_vecs(&mut canvas, &m, &options).unwrap();

        let figure = last_figure(&canvas);
        let (input, output) = (&figure.panels()[0], &figure.panels()[1]);
        assert_eq!(input.xlim(), Some((-1.1, 1.1)));
        assert_eq!(output.ylim(), Some((-4.0, 4.0)));
        assert_eq!(input.title(), Some("Input vectors"));
        assert_eq!(output.title(), Some("Output vectors"));

        let in_colors: Vec<_> = input.arrows().map(|a| a.color).collect();
        let out_colors: Vec<_> = output.arrows().map(|a| a.color).collect();
        assert_eq!(in_colors, out_colors);
        assert_eq!(in_colors[0], Colormap::Viridis.color(0.0));
        assert_eq!(in_colors[4], Colormap::Viridis.color(0.5));

        let first = output.arrows().next().unwrap();
        assert!((first.vector.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ring_without_inputs_has_one_panel() {
        let mut canvas = Canvas::new();
        let options = UnitVecOptions {
            plot_inputs: false,
            ..Default::default()
        };
        transform_unit_vecs(&mut canvas, &Array2::eye(2), &options).unwrap();
        let figure = last_figure(&canvas);
        assert_eq!(figure.panels().len(), 1);
        assert_eq!(figure.panels()[0].arrows().count(), 16);
    }

    #[test]
    fn ring_rejects_bad_inputs() {
        let mut canvas = Canvas::new();
        let err = transform_unit_vecs(&mut canvas, &Array2::eye(3), &UnitVecOptions::default())
            .unwrap_err();
        assert!(matches!(err, PlotvecError::Shape { .. }));

        let options = UnitVecOptions {
            colormap: "nope".into(),
            ..Default::default()
        };
        let err = transform_unit_vecs(&mut canvas, &Array2::eye(2), &options).unwrap_err();
        assert!(matches!(err, PlotvecError::UnknownColormap(_)));

        let options = UnitVecOptions {
            num_vectors: 0,
            ..Default::default()
        };
        assert!(transform_unit_vecs(&mut canvas, &Array2::eye(2), &options).is_err());
        assert!(canvas.is_empty());
    }

    #[test]
    fn lattice_follows_arange() {
        let points = lattice(3.0, 0.5).unwrap();
        assert_eq!(points.len(), 13 * 13);
        assert_eq!(points[0], Vector2::new(-3.0, -3.0));
        assert_eq!(points[1], Vector2::new(-3.0, -2.5));
        assert_eq!(*points.last().unwrap(), Vector2::new(3.0, 3.0));

        assert_eq!(lattice(0.0, 1.0).unwrap(), vec![Vector2::ZERO]);
        assert!(lattice(1.0, 0.0).is_err());
        assert!(lattice(-1.0, 0.5).is_err());
    }

    #[test]
    fn identity_field_skips_input_panel() {
        let mut canvas = Canvas::new();
        let options = FieldOptions {
            field_width: 1.0,
            point_spacing: 0.5,
            ..Default::default()
        };
        plot_field(&mut canvas, &Array2::eye(2), &options).unwrap();

        let figure = last_figure(&canvas);
        assert_eq!(figure.panels().len(), 1);
        let outputs: Vec<_> = figure.panels()[0].markers().map(|m| m.position).collect();
        assert_eq!(outputs, lattice(1.0, 0.5).unwrap());
    }

    #[test]
    fn field_colors_follow_angle() {
        let mut canvas = Canvas::new();
        let m = array![[0.0, -1.0], [1.0, 0.0]];
        let options = FieldOptions {
            field_width: 1.0,
            point_spacing: 1.0,
            ..Default::default()
        };
        plot_field(&mut canvas, &m, &options).unwrap();

        let figure = last_figure(&canvas);
        assert_eq!(figure.panels().len(), 2);
        let input = &figure.panels()[0];
        let output = &figure.panels()[1];
        assert_eq!(input.markers().count(), 9);

        // (1, 0) is at angle 0 and rotates to (0, 1) keeping its color.
        let east = input
            .markers()
            .find(|m| m.position == Vector2::new(1.0, 0.0))
            .unwrap();
        assert_eq!(east.color, Colormap::Plasma.color(0.0));
        let rotated = output
            .markers()
            .find(|m| m.position == Vector2::new(0.0, 1.0))
            .unwrap();
        assert_eq!(rotated.color, east.color);
        assert_eq!(output.xlim(), Some((-1.0, 1.0)));
    }

    #[test]
    fn field_without_preserved_axes_autoscales() {
        let mut canvas = Canvas::new();
        let options = FieldOptions {
            preserve_axes: false,
            ..Default::default()
        };
        plot_field(&mut canvas, &array![[3.0, 0.0], [0.0, 3.0]], &options).unwrap();
        let output = last_figure(&canvas).panels().last().unwrap();
        assert_eq!(output.xlim(), None);
        let (x, _) = output.view_limits();
        assert!(x.1 > 9.0);
    }

    #[test]
    fn field_rejects_bad_matrix_and_colormap() {
        let mut canvas = Canvas::new();
        let err = plot_field(&mut canvas, &Array2::zeros((2, 3)), &FieldOptions::default())
            .unwrap_err();
        assert!(matches!(err, PlotvecError::Shape { .. }));
        let options = FieldOptions {
            colormap: "unknown".into(),
            ..Default::default()
        };
        assert!(matches!(
            plot_field(&mut canvas, &Array2::eye(2), &options),
            Err(PlotvecError::UnknownColormap(_))
        ));
        assert!(canvas.is_empty());
    }
}
