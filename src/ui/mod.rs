//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`status`]: The two display elements and the temperature legend
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ ╭ is_active ─────╮╭ temperature ───╮ │
//! │ │     true       ││       72       │ │
//! │ ╰────────────────╯╰────────────────╯ │
//! │ cool < 50 ≤ warm ≤ 85 < hot          │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```

pub mod common;
pub mod status;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 8;

/// Render one full frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = area.intersection(Rect::new(
            area.x,
            area.y + area.height.saturating_sub(5) / 2,
            area.width,
            5,
        ));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(4),    // Elements + legend
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    status::render(frame, app, chunks[1]);
    common::render_status_bar(frame, app, chunks[2]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Thresholds;
    use crate::source::{ChannelSource, StatusSnapshot};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use tokio::sync::watch;

    fn app() -> (watch::Sender<Option<StatusSnapshot>>, App) {
        let (tx, source) = ChannelSource::create("test");
        let app = App::with_theme(Box::new(source), Thresholds::default(), Theme::dark());
        (tx, app)
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Position of the first cell where `needle` starts on a single row.
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let text = buffer_text(buffer);
        text.lines().enumerate().find_map(|(y, line)| {
            let chars: Vec<char> = line.chars().collect();
            let target: Vec<char> = needle.chars().collect();
            chars
                .windows(target.len())
                .position(|w| w == target.as_slice())
                .map(|x| (x as u16, y as u16))
        })
    }

    #[test]
    fn test_renders_placeholders_before_first_reading() {
        let (_tx, app) = app();
        let text = buffer_text(&draw(&app, 60, 12));
        assert!(text.contains("is_active"));
        assert!(text.contains("temperature"));
        assert!(text.contains("Waiting for first reading"));
    }

    #[test]
    fn test_renders_values_with_tone_colors() {
        let (tx, mut app) = app();
        tx.send(Some(StatusSnapshot::new(false, 90.0))).unwrap();
        assert!(app.reload_data());

        let buffer = draw(&app, 60, 12);
        let text = buffer_text(&buffer);
        assert!(text.contains("false"));
        assert!(text.contains("90"));
        assert!(text.contains("Updated"));

        let (x, y) = find(&buffer, "false").unwrap();
        assert_eq!(buffer[(x, y)].fg, app.theme.inactive);
        let (x, y) = find(&buffer, "90").unwrap();
        assert_eq!(buffer[(x, y)].fg, app.theme.hot);
    }

    #[test]
    fn test_renders_error_with_stale_values() {
        let (tx, mut app) = app();
        tx.send(Some(StatusSnapshot::new(true, 72.0))).unwrap();
        app.reload_data();
        app.load_error = Some("Endpoint returned status 500".to_string());

        let text = buffer_text(&draw(&app, 80, 12));
        assert!(text.contains("72"));
        assert!(text.contains("Endpoint returned status 500"));
        assert!(text.contains("showing last reading"));
    }

    #[test]
    fn test_renders_legend_with_thresholds() {
        let (_tx, app) = app();
        let text = buffer_text(&draw(&app, 60, 12));
        assert!(text.contains("< 50 ≤"));
        assert!(text.contains("≤ 85 <"));
    }

    #[test]
    fn test_renders_help_overlay() {
        let (_tx, mut app) = app();
        app.toggle_help();
        let text = buffer_text(&draw(&app, 60, 14));
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_small_terminal_shows_resize_message() {
        let (_tx, app) = app();
        let text = buffer_text(&draw(&app, 30, 6));
        assert!(text.contains("Terminal too small"));
    }
}
