//! Application state and logic.

use crate::canvas::{Canvas, Figure};
use crate::clipboard;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Everything that was plotted.
    pub canvas: Canvas,
    /// Index of the figure on screen.
    pub figure_index: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application showing the current figure of `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let figure_index = canvas.len().saturating_sub(1);
        let status = match canvas.len() {
            0 => "Nothing plotted".to_string(),
            1 => "1 figure".to_string(),
            n => format!("{} figures", n),
        };
        Self {
            canvas,
            figure_index,
            status,
            theme: Theme::GruvboxDark,
        }
    }

    /// The figure on screen.
    pub fn figure(&self) -> Option<&Figure> {
        self.canvas.figures().get(self.figure_index)
    }

    /// Show the next figure, wrapping around.
    pub fn next_figure(&mut self) {
        if self.canvas.is_empty() {
            return;
        }
        self.figure_index = (self.figure_index + 1) % self.canvas.len();
        self.status = self.figure_status();
    }

    /// Show the previous figure, wrapping around.
    pub fn prev_figure(&mut self) {
        if self.canvas.is_empty() {
            return;
        }
        self.figure_index = (self.figure_index + self.canvas.len() - 1) % self.canvas.len();
        self.status = self.figure_status();
    }

    fn figure_status(&self) -> String {
        format!("Figure {}/{}", self.figure_index + 1, self.canvas.len())
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy a text description of the figure on screen to the clipboard.
    pub fn copy_figure(&mut self) {
        let Some(figure) = self.figure() else {
            self.status = "No figure to copy".to_string();
            return;
        };
        let text = format!("figure {}\n{}", self.figure_index + 1, figure);
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.status = "Figure copied!".to_string(),
            Err(e) => {
                tracing::error!("Copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }
}
