//! Mapping from status snapshots to the two display elements.
//!
//! Each successful poll cycle rewrites both elements: the activity flag
//! and the temperature reading, each with a text value and a color tone.

use serde::Serialize;
use serde_json::Value;

use crate::source::StatusSnapshot;

/// Temperature bounds for color coding.
///
/// Readings below `warm_at` are cool, readings from `warm_at` up to and
/// including `hot_above` are warm, anything else is hot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Lowest temperature considered warm.
    pub warm_at: f64,
    /// Highest temperature still considered warm.
    pub hot_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warm_at: 50.0,
            hot_above: 85.0,
        }
    }
}

/// Color tone of a display element, resolved to a concrete color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No reading yet.
    Neutral,
    Active,
    Inactive,
    Cool,
    Warm,
    Hot,
}

/// Activity state derived from the raw `is_active` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Active,
    Inactive,
}

impl Activity {
    /// Only a literal `false` is inactive; `true`, `null` and anything else is active.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(false) => Activity::Inactive,
            _ => Activity::Active,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Activity::Active => Tone::Active,
            Activity::Inactive => Tone::Inactive,
        }
    }
}

/// Temperature band for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cool,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Classify a reading. Both bounds are inclusive for the warm band;
    /// a value that fails every comparison (NaN) lands in the hot band.
    pub fn classify(temperature: f64, thresholds: &Thresholds) -> Self {
        if temperature < thresholds.warm_at {
            TemperatureBand::Cool
        } else if temperature >= thresholds.warm_at && temperature <= thresholds.hot_above {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TemperatureBand::Cool => Tone::Cool,
            TemperatureBand::Warm => Tone::Warm,
            TemperatureBand::Hot => Tone::Hot,
        }
    }
}

/// A single named display element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub text: String,
    pub tone: Tone,
}

impl Element {
    fn placeholder() -> Self {
        Self {
            text: "-".to_string(),
            tone: Tone::Neutral,
        }
    }

    fn set(&mut self, text: String, tone: Tone) {
        self.text = text;
        self.tone = tone;
    }
}

/// The two display elements updated by each successful poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Display {
    pub is_active: Element,
    pub temperature: Element,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    /// Create a display showing placeholders until the first reading arrives.
    pub fn new() -> Self {
        Self {
            is_active: Element::placeholder(),
            temperature: Element::placeholder(),
        }
    }

    /// Apply a snapshot: both elements get new text and tone.
    pub fn apply(&mut self, snapshot: &StatusSnapshot, thresholds: &Thresholds) {
        let activity = Activity::from_value(&snapshot.is_active);
        self.is_active
            .set(activity_text(&snapshot.is_active), activity.tone());

        let band = TemperatureBand::classify(snapshot.temperature, thresholds);
        self.temperature
            .set(format_temperature(snapshot.temperature), band.tone());
    }

    /// Elements paired with their fixed names, in display order.
    pub fn elements(&self) -> [(&'static str, &Element); 2] {
        [
            ("is_active", &self.is_active),
            ("temperature", &self.temperature),
        ]
    }

    /// Whether any reading has been applied yet.
    pub fn has_reading(&self) -> bool {
        self.is_active.tone != Tone::Neutral
    }
}

/// Text for the activity element.
pub fn activity_text(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Null => "unknown".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decimal rendering of a reading: `72` for 72.0, `72.5` for 72.5.
pub fn format_temperature(temperature: f64) -> String {
    // -0.0 reads as 0
    if temperature == 0.0 {
        return "0".to_string();
    }
    temperature.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn applied(snapshot: &StatusSnapshot) -> Display {
        let mut display = Display::new();
        display.apply(snapshot, &Thresholds::default());
        display
    }

    #[test]
    fn test_activity_false_is_inactive() {
        assert_eq!(Activity::from_value(&json!(false)), Activity::Inactive);
    }

    #[test]
    fn test_activity_anything_else_is_active() {
        for value in [json!(true), Value::Null, json!(0), json!("no"), json!({})] {
            assert_eq!(Activity::from_value(&value), Activity::Active, "{value}");
        }
    }

    #[test]
    fn test_temperature_bands() {
        let t = Thresholds::default();
        assert_eq!(TemperatureBand::classify(-10.0, &t), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(49.9, &t), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(72.0, &t), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(85.1, &t), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::classify(255.0, &t), TemperatureBand::Hot);
    }

    #[test]
    fn test_temperature_boundaries_are_warm() {
        let t = Thresholds::default();
        assert_eq!(TemperatureBand::classify(50.0, &t), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(85.0, &t), TemperatureBand::Warm);
    }

    #[test]
    fn test_temperature_nan_is_hot() {
        let t = Thresholds::default();
        assert_eq!(TemperatureBand::classify(f64::NAN, &t), TemperatureBand::Hot);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            warm_at: 30.0,
            hot_above: 40.0,
        };
        assert_eq!(TemperatureBand::classify(29.0, &t), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(40.0, &t), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(41.0, &t), TemperatureBand::Hot);
    }

    #[test]
    fn test_apply_active_warm() {
        let display = applied(&StatusSnapshot::new(true, 72.0));
        assert_eq!(display.is_active.text, "true");
        assert_eq!(display.is_active.tone, Tone::Active);
        assert_eq!(display.temperature.text, "72");
        assert_eq!(display.temperature.tone, Tone::Warm);
    }

    #[test]
    fn test_apply_inactive_hot() {
        let display = applied(&StatusSnapshot::new(false, 90.0));
        assert_eq!(display.is_active.text, "false");
        assert_eq!(display.is_active.tone, Tone::Inactive);
        assert_eq!(display.temperature.text, "90");
        assert_eq!(display.temperature.tone, Tone::Hot);
    }

    #[test]
    fn test_apply_missing_activity() {
        let snapshot = StatusSnapshot::parse(r#"{"temperature":20}"#).unwrap();
        let display = applied(&snapshot);
        assert_eq!(display.is_active.text, "unknown");
        assert_eq!(display.is_active.tone, Tone::Active);
        assert_eq!(display.temperature.tone, Tone::Cool);
    }

    #[test]
    fn test_apply_overwrites_previous_values() {
        let mut display = applied(&StatusSnapshot::new(false, 90.0));
        display.apply(&StatusSnapshot::new(true, 12.0), &Thresholds::default());
        assert_eq!(display.is_active.text, "true");
        assert_eq!(display.temperature.text, "12");
        assert_eq!(display.temperature.tone, Tone::Cool);
    }

    #[test]
    fn test_new_display_has_placeholders() {
        let display = Display::new();
        assert!(!display.has_reading());
        for (_, element) in display.elements() {
            assert_eq!(element.text, "-");
            assert_eq!(element.tone, Tone::Neutral);
        }
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(72.0), "72");
        assert_eq!(format_temperature(72.5), "72.5");
        assert_eq!(format_temperature(-3.0), "-3");
        assert_eq!(format_temperature(-0.0), "0");
    }

    #[test]
    fn test_activity_text_unquotes_strings() {
        assert_eq!(activity_text(&json!("yes")), "yes");
        assert_eq!(activity_text(&json!(1)), "1");
        assert_eq!(activity_text(&json!(false)), "false");
    }

    #[test]
    fn test_display_serializes_with_element_names() {
        let display = applied(&StatusSnapshot::new(true, 72.0));
        let value = serde_json::to_value(&display).unwrap();
        assert_eq!(
            value,
            json!({
                "is_active": { "text": "true", "tone": "active" },
                "temperature": { "text": "72", "tone": "warm" }
            })
        );
    }
}
