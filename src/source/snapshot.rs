//! Wire type for the bridge's `/data` response.
//!
//! The bridge serializes its shared MCU state as a flat JSON object. Extra
//! keys (such as the serial port name) are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One status reading as returned by `GET /data`.
///
/// `is_active` is kept as the raw JSON value: only a literal `false` means
/// inactive, so a missing or non-boolean value still has to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether the board's serial link is up. `null` when the key is absent.
    #[serde(default)]
    pub is_active: Value,

    /// Last temperature reported by the board.
    pub temperature: f64,
}

impl StatusSnapshot {
    /// Build a snapshot from typed values.
    pub fn new(is_active: bool, temperature: f64) -> Self {
        Self {
            is_active: Value::Bool(is_active),
            temperature,
        }
    }

    /// Parse a snapshot from a JSON document.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
