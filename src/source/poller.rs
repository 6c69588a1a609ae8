//! Poll loop controller.
//!
//! Runs one fetch per tick inside a single task. A cycle is awaited to
//! completion before the next tick is taken, so at most one request is ever
//! outstanding; ticks missed while a request is slow are skipped rather than
//! queued. Outcomes are forwarded in order over an mpsc channel.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::PollOutcome;

/// Default time between poll cycles.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

/// Something that can produce one poll outcome.
pub trait StatusFetch: Send + Sync + 'static {
    /// Run one fetch-and-parse cycle.
    fn fetch(&self) -> impl Future<Output = PollOutcome> + Send;
}

/// Owns the fetcher and the schedule; hands out cancellable loops.
#[derive(Debug)]
pub struct StatusPoller<F> {
    fetcher: Arc<F>,
    period: Duration,
}

impl<F> Clone for StatusPoller<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            period: self.period,
        }
    }
}

impl<F: StatusFetch> StatusPoller<F> {
    pub fn new(fetcher: F, period: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start the loop: one poll immediately, then one per period.
    ///
    /// Must be called from within a tokio runtime. The loop ends when the
    /// returned handle is stopped or dropped, or when the receiver is dropped.
    pub fn start(&self, sender: mpsc::Sender<PollOutcome>) -> PollerHandle {
        let fetcher = Arc::clone(&self.fetcher);
        let period = self.period;

        info!(period_ms = period.as_millis() as u64, "starting status poller");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let outcome = fetcher.fetch().await;
                match &outcome {
                    Ok(snapshot) => debug!(
                        is_active = %snapshot.is_active,
                        temperature = snapshot.temperature,
                        "poll succeeded"
                    ),
                    Err(e) => warn!(error = %e, "poll failed, keeping previous values"),
                }

                if sender.send(outcome).await.is_err() {
                    // Receiver dropped
                    break;
                }
            }
        });

        PollerHandle { task }
    }
}

/// Handle to a running poll loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the loop. An in-flight request is cancelled.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            info!("stopping status poller");
        }
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
