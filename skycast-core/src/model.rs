use serde::{Deserialize, Serialize};

/// One hourly forecast point for the selected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time_epoch: i64,
    /// Provider-local wall clock, e.g. "2026-08-30 14:00".
    pub time: String,
    pub temp_c: f64,
}

impl HourlyPoint {
    /// "HH:MM" label for display.
    ///
    /// Prefers the provider's local wall-clock string; falls back to the
    /// epoch rendered as UTC when the string has an unexpected shape.
    pub fn clock_label(&self) -> String {
        if let Some(hhmm) = self.time.split_whitespace().nth(1) {
            return hhmm.to_string();
        }
        chrono::DateTime::from_timestamp(self.time_epoch, 0)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// The full result of one successful weather fetch: current conditions plus
/// the same-day hourly forecast. Created fresh per fetch and replaced whole,
/// never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    /// Provider-local date/time string for the location.
    pub localtime: String,
    pub temp_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub cloud_pct: u8,
    pub hourly: Vec<HourlyPoint>,
}

/// Icon bucket for a temperature, used for the current reading and for each
/// of the first hourly points shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempIcon {
    Sunny,
    Mild,
    Cold,
}

impl TempIcon {
    pub fn for_temp_c(temp_c: f64) -> Self {
        if temp_c > 20.0 {
            TempIcon::Sunny
        } else if temp_c > 10.0 {
            TempIcon::Mild
        } else {
            TempIcon::Cold
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TempIcon::Sunny => "☀",
            TempIcon::Mild => "☂",
            TempIcon::Cold => "❄",
        }
    }
}

/// Panel header color bucket. The header fades from this color to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientColor {
    Red,
    Amber,
    Blue,
}

impl GradientColor {
    pub fn for_temp_c(temp_c: f64) -> Self {
        if temp_c >= 30.0 {
            GradientColor::Red
        } else if temp_c >= 20.0 {
            GradientColor::Amber
        } else {
            GradientColor::Blue
        }
    }

    /// RGB value of the hot end of the fade.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            GradientColor::Red => (0xFF, 0x17, 0x44),
            GradientColor::Amber => (0xFF, 0xC1, 0x07),
            GradientColor::Blue => (0x21, 0x96, 0xF3),
        }
    }
}
