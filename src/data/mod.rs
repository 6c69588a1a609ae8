//! Data models for the status display.
//!
//! Converts raw status snapshots into the two colored display elements.
//!
//! ## Data Flow
//!
//! ```text
//! StatusSnapshot (raw JSON)
//!        │
//!        ▼
//! Display::apply()
//!        │
//!        ├──▶ is_active   (Activity → Active / Inactive tone)
//!        │
//!        └──▶ temperature (TemperatureBand from Thresholds → Cool / Warm / Hot tone)
//! ```

pub mod display;

pub use display::{Activity, Display, Element, TemperatureBand, Thresholds, Tone};
