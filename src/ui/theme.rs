//! Color themes for the UI.

use crate::app::Theme;
use crate::color::Rgb;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Panel title color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Background that plot colors are blended over for transparency.
    pub paper: Rgb,
    /// Replaces black plot primitives so they stay visible on dark themes.
    pub ink: Rgb,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                paper: Rgb(40, 40, 40),
                ink: Rgb(235, 219, 178),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                paper: Rgb(251, 245, 234),
                ink: Rgb(60, 56, 54),
            },
        }
    }

    /// Terminal color for a plot color drawn with opacity `alpha`.
    pub fn plot_color(&self, color: Rgb, alpha: f64) -> Color {
        let color = if color == Rgb::BLACK { self.ink } else { color };
        color.blend(self.paper, alpha).into()
    }
}
