//! Data source abstraction for receiving status snapshots.
//!
//! This module provides a trait-based abstraction for receiving status
//! readings from various sources (the bridge's HTTP endpoint, in-memory
//! channels, etc.).

mod channel;
pub mod client;
mod error;
mod http;
pub mod poller;
mod snapshot;

pub use channel::ChannelSource;
pub use client::{StatusClient, StatusClientBuilder};
pub use error::{PollError, PollOutcome};
pub use http::HttpSource;
pub use poller::{PollerHandle, StatusFetch, StatusPoller};
pub use snapshot::StatusSnapshot;

use std::fmt::Debug;

/// Trait for receiving status snapshots from various sources.
///
/// # Example
///
/// ```
/// use mcuwatch::{ChannelSource, DataSource, StatusSnapshot};
///
/// let (tx, mut source) = ChannelSource::create("test");
/// tx.send(Some(StatusSnapshot::new(true, 72.0))).unwrap();
///
/// if let Some(snapshot) = source.poll() {
///     println!("temperature: {}", snapshot.temperature);
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<StatusSnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI header.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if the most recent poll cycle failed.
    fn error(&self) -> Option<&str>;

    /// Stop producing snapshots until [`resume`](Self::resume) is called.
    fn pause(&mut self) {}

    /// Restart a paused source.
    fn resume(&mut self) {}

    /// Start a fresh cycle now, cancelling any cycle in flight.
    fn refresh(&mut self) {}

    fn is_paused(&self) -> bool {
        false
    }
}
