//! User interface rendering.

mod panel;
mod theme;

use crate::app::App;
use crate::config::TerminalLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Figure area, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    draw_figure(f, app, chunks[0], &colors);
    draw_status(f, app, chunks[1], &colors);
    draw_keymap(f, chunks[2], &colors);
}

fn draw_figure(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(figure) = app.figure() else {
        let para = Paragraph::new("Nothing to display")
            .style(Style::default().fg(colors.text).bg(colors.bg))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    };

    let panels = figure.panels();
    let constraints: Vec<Constraint> = panels
        .iter()
        .map(|_| Constraint::Ratio(1, panels.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let cfg = TerminalLayoutConfig::default();
    for (axes, column) in panels.iter().zip(columns.iter()) {
        panel::draw_panel(f, *column, axes, colors, &cfg);
    }
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(app.status.as_str())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text = "q/Esc:quit | n/p/Tab:figure | T:theme | y:copy";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
