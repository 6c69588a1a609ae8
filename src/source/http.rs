//! HTTP polling data source.
//!
//! Drives a [`StatusPoller`] against the bridge's `/data` endpoint and
//! hands its outcomes to the TUI thread without blocking.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};

use super::{
    DataSource, PollOutcome, PollerHandle, StatusClient, StatusPoller, StatusSnapshot,
};

/// Outcomes buffered between the poll task and the TUI.
const CHANNEL_CAPACITY: usize = 16;

/// A data source that polls the status endpoint on a fixed period.
///
/// The poll loop runs on the given runtime; `poll()` drains whatever
/// outcomes have arrived since the last call. Failed cycles only update
/// the error message, so the caller keeps showing the last good values.
#[derive(Debug)]
pub struct HttpSource {
    runtime: Handle,
    poller: StatusPoller<StatusClient>,
    receiver: Option<mpsc::Receiver<PollOutcome>>,
    handle: Option<PollerHandle>,
    description: String,
    last_error: Option<String>,
}

impl HttpSource {
    /// Start polling with `client` every `period` on `runtime`.
    pub fn start(client: StatusClient, period: Duration, runtime: Handle) -> Self {
        let description = format!("http: {}", client.url());
        let mut source = Self {
            runtime,
            poller: StatusPoller::new(client, period),
            receiver: None,
            handle: None,
            description,
            last_error: None,
        };
        source.spawn();
        source
    }

    /// Time between poll cycles.
    pub fn period(&self) -> Duration {
        self.poller.period()
    }

    fn spawn(&mut self) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let _guard = self.runtime.enter();
        self.handle = Some(self.poller.start(tx));
        self.receiver = Some(rx);
    }

    fn halt(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
        }
        // Outcomes still buffered belong to the stopped loop.
        self.receiver = None;
    }
}

impl DataSource for HttpSource {
    fn poll(&mut self) -> Option<StatusSnapshot> {
        let receiver = self.receiver.as_mut()?;
        let mut latest = None;

        loop {
            match receiver.try_recv() {
                Ok(Ok(snapshot)) => {
                    self.last_error = None;
                    latest = Some(snapshot);
                }
                Ok(Err(e)) => {
                    self.last_error = Some(e.to_string());
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.last_error = Some("Poller stopped".to_string());
                    self.receiver = None;
                    self.handle = None;
                    break;
                }
            }
        }

        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn pause(&mut self) {
        self.halt();
    }

    fn resume(&mut self) {
        if self.handle.is_none() {
            self.spawn();
        }
    }

    fn refresh(&mut self) {
        self.halt();
        self.spawn();
    }

    fn is_paused(&self) -> bool {
        self.handle.is_none()
    }
}
