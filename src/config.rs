//! Layout and styling constants.

/// Styling used by the plotting operations.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Padding added beyond the outermost vector tip on every side.
    pub padding: f64,
    /// Axis limits never get tighter than `[-min_extent, min_extent]`.
    pub min_extent: f64,
    /// Line width of the reference lines through the origin.
    pub reference_width: f64,
    /// Opacity of the reference lines through the origin.
    pub reference_alpha: f64,
    /// Fraction of the sum vector covered by the dashed lead-in.
    pub sum_lead_fraction: f64,
    /// Marker size of lattice points.
    pub scatter_size: f64,
    /// Half-extent of the input panel of the unit-vector ring.
    pub ring_input_extent: f64,
    /// Half-extent of the output panel of the unit-vector ring.
    pub ring_output_extent: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            padding: 1.0,
            min_extent: 1.0,
            reference_width: 0.5,
            reference_alpha: 0.5,
            sum_lead_fraction: 0.9,
            scatter_size: 2.0,
            ring_input_extent: 1.1,
            ring_output_extent: 4.0,
        }
    }
}

/// Configuration for drawing panels in the terminal.
#[derive(Debug, Clone)]
pub struct TerminalLayoutConfig {
    /// Arrowhead barb length as a fraction of the panel's smaller span.
    pub arrowhead_fraction: f64,
    /// Arrowhead barb angle from the shaft, in degrees.
    pub arrowhead_angle_deg: f64,
    /// Number of dash/gap pairs per dashed line.
    pub dash_count: usize,
    /// Character cells are roughly twice as tall as they are wide.
    pub cell_aspect: f64,
    /// Padding inside the legend box, in cells.
    pub legend_padding: u16,
}

impl Default for TerminalLayoutConfig {
    fn default() -> Self {
        Self {
            arrowhead_fraction: 0.04,
            arrowhead_angle_deg: 25.0,
            dash_count: 12,
            cell_aspect: 2.0,
            legend_padding: 1,
        }
    }
}
