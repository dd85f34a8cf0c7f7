//! Text rendering for observations and forecast series.
//!
//! Output is returned as strings so the binary owns all printing; the
//! layout (padding, glyph, capitalized description, temperature suffix)
//! is fixed and unit-aware.

use chrono::{DateTime, Local};

use crate::condition::Condition;
use crate::query::Units;
use crate::weather::{ForecastSeries, Observation, Rain};

/// Column width for the name/timestamp and description fields.
const PADDING: usize = 20;

/// Liters (mm over a 3-hour window) to inches.
const LITERS_TO_INCHES: f64 = 0.0393701;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    units: Units,
    verbose: bool,
}

impl Renderer {
    pub fn new(units: Units, verbose: bool) -> Self {
        Renderer { units, verbose }
    }

    /// Render a single observation: one line, plus a min/max/rain/humidity/
    /// wind summary line in verbose mode.
    pub fn observation(&self, observation: &Observation) -> String {
        let (code, description) = observation.condition();
        let mut out = self.line(&observation.name, code, description, observation.main.temp);

        if self.verbose {
            let degrees = self.units.degrees();
            out.push('\n');
            out.push_str(&format!(
                "Max:{max}{degrees} | Min:{min}{degrees} | {rain}in rain | \
                 {humidity}% humidity | {wind} {speed}",
                max = observation.main.temp_max,
                min = observation.main.temp_min,
                rain = rain_inches(observation.rain.as_ref()),
                humidity = observation.main.humidity,
                wind = observation.wind.speed,
                speed = self.units.speed(),
            ));
        }

        out
    }

    /// Render a forecast series: one line per 3-hour block, chronological,
    /// keyed by the block's local timestamp. Verbose mode appends rain,
    /// humidity and wind to each line instead of a trailing summary.
    pub fn forecast(&self, series: &ForecastSeries) -> String {
        let mut lines = Vec::with_capacity(series.list.len());

        for entry in &series.list {
            let (code, description) = entry.condition();
            let mut line = self.line(&local_timestamp(entry.dt), code, description, entry.main.temp);

            if self.verbose {
                line.push_str(&format!(
                    " {rain}in rain, {humidity}% humidity, {wind} {speed}",
                    rain = rain_inches(entry.rain.as_ref()),
                    humidity = entry.main.humidity,
                    wind = entry.wind.speed,
                    speed = self.units.speed(),
                ));
            }

            lines.push(line);
        }

        lines.join("\n")
    }

    fn line(&self, label: &str, code: u16, description: &str, temp: f64) -> String {
        let glyph = Condition::classify(code).glyph();
        format!(
            "{label:<PADDING$} {glyph} {description:<PADDING$}{temp}{degrees}",
            description = capitalize(description),
            degrees = self.units.degrees(),
        )
    }
}

fn rain_inches(rain: Option<&Rain>) -> f64 {
    let liters = rain.map_or(0.0, |r| r.three_hour);
    (liters * LITERS_TO_INCHES * 100.0).round() / 100.0
}

fn local_timestamp(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0).map_or_else(
        || unix_seconds.to_string(),
        |t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
