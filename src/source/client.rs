//! HTTP client for the bridge's status endpoint.
//!
//! Issues `GET <endpoint>/data` and decodes the JSON body into a
//! [`StatusSnapshot`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mcuwatch::StatusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatusClient::builder()
//!         .endpoint("http://127.0.0.1:8080")
//!         .build()?;
//!
//!     let snapshot = client.fetch().await?;
//!     println!("active: {}, temperature: {}", snapshot.is_active, snapshot.temperature);
//!
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use super::poller::StatusFetch;
use super::{PollError, PollOutcome, StatusSnapshot};

/// Default bridge address.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the status endpoint.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: Client,
    url: String,
    accept_error_bodies: bool,
}

impl StatusClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> StatusClientBuilder {
        StatusClientBuilder::default()
    }

    /// Full URL of the status resource.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one status snapshot.
    ///
    /// A non-success status is an error unless the client was built with
    /// `accept_error_bodies`, in which case the body is still decoded and
    /// the status code is only logged.
    pub async fn fetch(&self) -> PollOutcome {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %self.url, "status endpoint returned an error");
            if !self.accept_error_bodies {
                return Err(PollError::Status(status.as_u16()));
            }
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<StatusSnapshot>(&body) {
            Ok(snapshot) => Ok(snapshot),
            // The status code says more than the parse failure does.
            Err(_) if !status.is_success() => Err(PollError::Status(status.as_u16())),
            Err(e) => Err(e.into()),
        }
    }
}

impl StatusFetch for StatusClient {
    fn fetch(&self) -> impl Future<Output = PollOutcome> + Send {
        StatusClient::fetch(self)
    }
}

/// Builder for [`StatusClient`].
#[derive(Debug, Default)]
pub struct StatusClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    accept_error_bodies: bool,
}

impl StatusClientBuilder {
    /// Set the bridge base URL (e.g., "http://127.0.0.1:8080").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 5 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Decode bodies of non-success responses instead of rejecting them.
    pub fn accept_error_bodies(mut self, accept: bool) -> Self {
        self.accept_error_bodies = accept;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<StatusClient, PollError> {
        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(StatusClient {
            client,
            url: status_url(&endpoint),
            accept_error_bodies: self.accept_error_bodies,
        })
    }
}

fn status_url(endpoint: &str) -> String {
    format!("{}/data", endpoint.trim_end_matches('/'))
}
