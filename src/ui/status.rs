//! Status view rendering.
//!
//! Shows the two display elements side by side, each as a bordered box
//! with its fixed name as title and its value colored by tone.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::display::format_temperature;
use crate::data::{Element, Tone};

/// Render the status view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [boxes, legend] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let columns =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(boxes);

    for ((name, element), column) in app.display.elements().into_iter().zip(columns.iter()) {
        render_element(frame, app, name, element, *column);
    }

    render_legend(frame, app, legend);
}

fn render_element(frame: &mut Frame, app: &App, name: &str, element: &Element, area: Rect) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", name), app.theme.label))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Vertically centered single line
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let value = Paragraph::new(Span::styled(
        element.text.clone(),
        app.theme.tone_style(element.tone),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(value, row);
}

/// One-line key explaining the temperature colors.
fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let warm_at = format_temperature(app.thresholds.warm_at);
    let hot_above = format_temperature(app.thresholds.hot_above);
    let theme = &app.theme;

    let line = Line::from(vec![
        Span::styled("cool", theme.tone_style(Tone::Cool)),
        Span::raw(format!(" < {} ≤ ", warm_at)),
        Span::styled("warm", theme.tone_style(Tone::Warm)),
        Span::raw(format!(" ≤ {} < ", hot_above)),
        Span::styled("hot", theme.tone_style(Tone::Hot)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
