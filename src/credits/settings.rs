use serde::{Deserialize, Deserializer, Serialize};

use super::scroll::travel_px;
use crate::error::WidgetError;

pub const OFFSET_RANGE: (u16, u16) = (0, 200);
pub const SPEED_RANGE: (f64, f64) = (0.1, 2.0);
pub const FONT_RANGE: (u8, u8) = (12, 32);

/// Pixels scrolled per second at speed 1.0.
pub const PIXELS_PER_SECOND: f64 = 100.0;

/// User-adjustable credits settings. Values are clamped on every write.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsSettings {
    /// Start position below the top of the viewport, in percent of its height.
    #[serde(deserialize_with = "offset_pct")]
    pub start_offset_pct: u16,
    pub speed: f64,
    #[serde(deserialize_with = "font_px")]
    pub font_size_px: u8,
}

// Config numbers may be fractional or outside the field's integer type;
// they are rounded and pulled into range instead of rejected.
fn rounded_within<'de, D: Deserializer<'de>>(de: D, lo: f64, hi: f64) -> Result<f64, D::Error> {
    let value = f64::deserialize(de)?;
    Ok(value.round().clamp(lo, hi))
}

fn offset_pct<'de, D: Deserializer<'de>>(de: D) -> Result<u16, D::Error> {
    rounded_within(de, OFFSET_RANGE.0.into(), OFFSET_RANGE.1.into()).map(|v| v as u16)
}

fn font_px<'de, D: Deserializer<'de>>(de: D) -> Result<u8, D::Error> {
    rounded_within(de, FONT_RANGE.0.into(), FONT_RANGE.1.into()).map(|v| v as u8)
}

impl Default for CreditsSettings {
    fn default() -> Self {
        Self {
            start_offset_pct: 100,
            speed: 1.0,
            font_size_px: 16,
        }
    }
}

impl CreditsSettings {
    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Self =
            serde_json::from_str(json).map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        Ok(parsed.clamped())
    }

    pub fn clamped(mut self) -> Self {
        self.set_start_offset(self.start_offset_pct);
        self.set_speed(self.speed);
        self.set_font_size(self.font_size_px);
        self
    }

    pub fn set_start_offset(&mut self, pct: u16) {
        self.start_offset_pct = pct.clamp(OFFSET_RANGE.0, OFFSET_RANGE.1);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() {
            // slider step is 0.1
            ((speed * 10.0).round() / 10.0).clamp(SPEED_RANGE.0, SPEED_RANGE.1)
        } else {
            1.0
        };
    }

    pub fn set_font_size(&mut self, px: u8) {
        self.font_size_px = px.clamp(FONT_RANGE.0, FONT_RANGE.1);
    }

    pub fn start_offset_px(&self, viewport_h: f64) -> f64 {
        viewport_h * self.start_offset_pct as f64 / 100.0
    }

    /// Seconds a full run takes: from the start offset until the content and
    /// its bottom padding have left the top of the viewport.
    pub fn duration_secs(&self, content_h: f64, viewport_h: f64) -> f64 {
        travel_px(content_h, self.start_offset_px(viewport_h)) / (PIXELS_PER_SECOND * self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_partial_json() {
        assert_eq!(CreditsSettings::from_json("").unwrap(), CreditsSettings::default());
        let s = CreditsSettings::from_json(r#"{"speed": 1.5}"#).unwrap();
        assert_eq!(s.speed, 1.5);
        assert_eq!(s.font_size_px, 16);
        assert_eq!(s.start_offset_pct, 100);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let s = CreditsSettings::from_json(
            r#"{"start_offset_pct": 500, "speed": 9.0, "font_size_px": 4}"#,
        )
        .unwrap();
        assert_eq!(s.start_offset_pct, 200);
        assert_eq!(s.speed, 2.0);
        assert_eq!(s.font_size_px, 12);

        let s = CreditsSettings::from_json(r#"{"font_size_px": 300}"#).unwrap();
        assert_eq!(s.font_size_px, 32);
        let s = CreditsSettings::from_json(r#"{"start_offset_pct": -5}"#).unwrap();
        assert_eq!(s.start_offset_pct, 0);
        let s = CreditsSettings::from_json(r#"{"start_offset_pct": 50.5, "font_size_px": 17.4}"#).unwrap();
        assert_eq!(s.start_offset_pct, 51);
        assert_eq!(s.font_size_px, 17);

        let mut s = CreditsSettings::default();
        s.set_speed(0.0);
        assert_eq!(s.speed, 0.1);
        s.set_speed(f64::NAN);
        assert_eq!(s.speed, 1.0);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(
            CreditsSettings::from_json("{speed:"),
            Err(WidgetError::InvalidConfig(_))
        ));
        assert!(matches!(
            CreditsSettings::from_json(r#"{"font_size_px": "big"}"#),
            Err(WidgetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn derived_values() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let mut s = CreditsSettings::default();
        // 400 start + 600 content + 96 padding
        assert!(close(s.duration_secs(600.0, 400.0), 10.96));
        s.set_speed(2.0);
        assert!(close(s.duration_secs(600.0, 400.0), 5.48));
        s.set_start_offset(50);
        assert_eq!(s.start_offset_px(800.0), 400.0);
        // 100 start + 104 content + 96 padding at 2x
        assert!(close(s.duration_secs(104.0, 200.0), 1.5));
    }
}
