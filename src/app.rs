//! Application state and user interaction logic.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::data::{Display, Thresholds};
use crate::settings::Settings;
use crate::source::DataSource;
use crate::ui::Theme;

/// How long a transient status message stays on screen.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub display: Display,
    pub thresholds: Thresholds,
    pub load_error: Option<String>,
    pub last_updated: Option<Instant>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and thresholds.
    pub fn new(source: Box<dyn DataSource>, thresholds: Thresholds) -> Self {
        Self::with_theme(source, thresholds, Theme::auto_detect())
    }

    /// Create a new App with an explicit theme.
    pub fn with_theme(source: Box<dyn DataSource>, thresholds: Thresholds, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            display: Display::new(),
            thresholds,
            load_error: None,
            last_updated: None,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    pub fn is_paused(&self) -> bool {
        self.source.is_paused()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and apply any new snapshot to the display.
    ///
    /// Returns true if the display was updated. A failed cycle leaves the
    /// display untouched and only records the error.
    pub fn reload_data(&mut self) -> bool {
        let snapshot = self.source.poll();
        self.load_error = self.source.error().map(str::to_string);

        match snapshot {
            Some(snapshot) => {
                self.display.apply(&snapshot, &self.thresholds);
                self.last_updated = Some(Instant::now());
                true
            }
            None => false,
        }
    }

    /// Cancel any cycle in flight and poll again right away.
    pub fn refresh_now(&mut self) {
        self.source.refresh();
        self.set_status_message("Refreshing...".to_string());
    }

    /// Pause or resume polling.
    pub fn toggle_pause(&mut self) {
        if self.source.is_paused() {
            self.source.resume();
            self.set_status_message("Polling resumed".to_string());
        } else {
            self.source.pause();
            let message = if self.source.is_paused() {
                "Polling paused"
            } else {
                "Source cannot be paused"
            };
            self.set_status_message(message.to_string());
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Poll the bridge a single time and return the rendered elements.
///
/// Any failed poll is an error here; there is no previous reading to keep.
pub async fn poll_once(settings: &Settings) -> Result<Display> {
    let client = settings.client()?;
    let snapshot = client
        .fetch()
        .await
        .with_context(|| format!("failed to poll {}", client.url()))?;

    let mut display = Display::new();
    display.apply(&snapshot, &settings.thresholds());
    Ok(display)
}
