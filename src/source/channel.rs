//! Channel-based data source.
//!
//! Receives status snapshots via a tokio watch channel. Useful when the
//! readings are pushed by the embedding program rather than polled.

use tokio::sync::watch;

use super::{DataSource, StatusSnapshot};

/// A data source that receives status snapshots via a channel.
///
/// # Example
///
/// ```
/// use mcuwatch::ChannelSource;
///
/// // Create a channel pair
/// let (tx, source) = ChannelSource::create("serial:/dev/ttyUSB0");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Option<StatusSnapshot>>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - A description of where snapshots come from
    pub fn new(receiver: watch::Receiver<Option<StatusSnapshot>>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
        }
    }

    /// Create a channel pair for sending snapshots to a ChannelSource.
    ///
    /// Returns (sender, source). The source starts out empty.
    pub fn create(source_description: &str) -> (watch::Sender<Option<StatusSnapshot>>, Self) {
        let (tx, rx) = watch::channel(None);
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<StatusSnapshot> {
        if self.receiver.has_changed().unwrap_or(false) {
            self.receiver.borrow_and_update().clone()
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
