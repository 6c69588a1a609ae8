//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Tone;

const ORANGE: Color = Color::Rgb(255, 165, 0);
const DARK_ORANGE: Color = Color::Rgb(205, 110, 0);

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Link is up.
    pub active: Color,
    /// Link is down.
    pub inactive: Color,
    /// Temperature below the warm threshold.
    pub cool: Color,
    /// Temperature inside the warm band.
    pub warm: Color,
    /// Temperature above the warm band.
    pub hot: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for element labels.
    pub label: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            active: Color::Green,
            inactive: Color::Red,
            cool: Color::LightBlue,
            warm: ORANGE,
            hot: Color::Red,
            border: Color::Gray,
            label: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            active: Color::Green,
            inactive: Color::Red,
            cool: Color::Blue,
            warm: DARK_ORANGE,
            hot: Color::Red,
            border: Color::DarkGray,
            label: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a display element's tone
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => Style::default().add_modifier(Modifier::DIM),
            Tone::Active => Style::default().fg(self.active).add_modifier(Modifier::BOLD),
            Tone::Inactive => Style::default().fg(self.inactive).add_modifier(Modifier::BOLD),
            Tone::Cool => Style::default().fg(self.cool).add_modifier(Modifier::BOLD),
            Tone::Warm => Style::default().fg(self.warm).add_modifier(Modifier::BOLD),
            Tone::Hot => Style::default().fg(self.hot).add_modifier(Modifier::BOLD),
        }
    }
}
