//! # mcuwatch
//!
//! A terminal status monitor for a microcontroller bridge.
//!
//! The bridge is a small host process that talks to the board over a serial
//! link and serves the board's state as JSON on `GET /data`:
//!
//! ```json
//! { "is_active": true, "temperature": 72 }
//! ```
//!
//! This crate polls that endpoint once per second and shows the two fields
//! as colored display elements: the activity flag in green (active) or red
//! (inactive), and the temperature in blue (cool), orange (warm) or red
//! (hot).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (display)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource (StatusPoller) | ChannelSource  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and user interaction logic
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait), the HTTP
//!   client, and the poll loop controller
//! - **[`data`]**: Display model - maps a [`StatusSnapshot`] to two colored
//!   [`Element`]s using [`Thresholds`]
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`settings`]** and **[`logging`]**: configuration and tracing setup
//!
//! ## Polling model
//!
//! The poll loop polls once immediately and then once per period. Each
//! cycle finishes (or times out) before the next one starts, so at most one
//! request is outstanding and results arrive in the order they were issued.
//! A failed cycle (connection error, timeout, non-success status,
//! unparseable body) is logged and skipped; the display keeps the last good
//! values.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch the bridge on its default address
//! mcuwatch
//!
//! # Watch a remote bridge, polling every 500ms
//! mcuwatch --endpoint http://192.168.1.20:8080 --refresh 500
//!
//! # Single reading as JSON
//! mcuwatch --once
//! ```
//!
//! ### As a library with channel source
//!
//! ```
//! use mcuwatch::{App, ChannelSource, StatusSnapshot, Thresholds};
//!
//! let (tx, source) = ChannelSource::create("serial:/dev/ttyUSB0");
//! let mut app = App::new(Box::new(source), Thresholds::default());
//!
//! tx.send(Some(StatusSnapshot::new(true, 72.0))).unwrap();
//! app.reload_data();
//! assert_eq!(app.display.temperature.text, "72");
//! ```
//!
//! ### Driving the poller directly
//!
//! ```no_run
//! use std::time::Duration;
//! use mcuwatch::{StatusClient, StatusPoller};
//! use tokio::sync::mpsc;
//!
//! # tokio_test::block_on(async {
//! let client = StatusClient::builder().endpoint("http://127.0.0.1:8080").build().unwrap();
//! let poller = StatusPoller::new(client, Duration::from_secs(1));
//!
//! let (tx, mut rx) = mpsc::channel(16);
//! let handle = poller.start(tx);
//! if let Some(Ok(snapshot)) = rx.recv().await {
//!     println!("temperature: {}", snapshot.temperature);
//! }
//! handle.stop();
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{poll_once, App};
pub use data::{Activity, Display, Element, TemperatureBand, Thresholds, Tone};
pub use settings::Settings;
pub use source::{
    ChannelSource, DataSource, HttpSource, PollError, PollOutcome, PollerHandle, StatusClient,
    StatusFetch, StatusPoller, StatusSnapshot,
};
