//! Human-friendly weather panel rendering.
//!
//! `render_panel` is a pure function from an immutable snapshot to text, so
//! it can be asserted on byte-for-byte. Color is applied separately at print
//! time.

use chrono::NaiveDate;
use crossterm::style::{Color, Stylize};
use skycast_core::model::{GradientColor, TempIcon, WeatherSnapshot};

/// How many hourly forecast points the panel shows.
const HOURLY_SHOWN: usize = 3;
const PANEL_WIDTH: usize = 46;

/// Render the weather panel as plain text.
pub fn render_panel(snapshot: &WeatherSnapshot, today: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", snapshot.location_name));
    out.push_str(&format!("{}\n", today.format("%a, %b %-d")));
    out.push('\n');

    for point in snapshot.hourly.iter().take(HOURLY_SHOWN) {
        let icon = TempIcon::for_temp_c(point.temp_c);
        out.push_str(&format!(
            "  {}  {}  {}°C\n",
            point.clock_label(),
            icon.glyph(),
            point.temp_c
        ));
    }
    if !snapshot.hourly.is_empty() {
        out.push('\n');
    }

    let icon = TempIcon::for_temp_c(snapshot.temp_c);
    out.push_str(&format!(
        "  now  {}  {}°C  {}\n",
        icon.glyph(),
        snapshot.temp_c,
        snapshot.condition
    ));
    out.push_str(&format!(
        "  wind {} km/h · humidity {}% · cloud {}%\n",
        snapshot.wind_kph, snapshot.humidity_pct, snapshot.cloud_pct
    ));

    out
}

/// One step of the hot-color-to-white fade at position `i` of `steps`.
fn fade_to_white(rgb: (u8, u8, u8), i: usize, steps: usize) -> (u8, u8, u8) {
    let t = i as f64 / steps.saturating_sub(1).max(1) as f64;
    let blend = |c: u8| -> u8 { (f64::from(c) + (255.0 - f64::from(c)) * t).round() as u8 };
    (blend(rgb.0), blend(rgb.1), blend(rgb.2))
}

/// Styled bar imitating the original panel's linear-gradient background.
pub fn gradient_bar(color: GradientColor) -> String {
    let start = color.rgb();
    let mut bar = String::new();
    for i in 0..PANEL_WIDTH {
        let (r, g, b) = fade_to_white(start, i, PANEL_WIDTH);
        bar.push_str(&"█".with(Color::Rgb { r, g, b }).to_string());
    }
    bar
}

/// Print the panel with its temperature-colored header bar.
pub fn print_panel(snapshot: &WeatherSnapshot, today: NaiveDate) {
    let color = GradientColor::for_temp_c(snapshot.temp_c);
    println!("{}", gradient_bar(color));
    print!("{}", render_panel(snapshot, today));
    println!("{}", gradient_bar(color));
}
