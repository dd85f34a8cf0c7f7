//! Weather-condition code classification.
//!
//! The provider identifies phenomena with integer codes grouped by century:
//! 2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere
//! (fog, haze, dust...), 800 clear, 801-899 cloudy. Codes outside the
//! documented ranges classify as [`Condition::Unknown`] so a new provider
//! code never breaks rendering.

use std::ops::Range;

/// One of the eight display categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloudy,
    Unknown,
}

/// Half-open, non-overlapping code ranges, evaluated in order.
static RULES: [(Range<u16>, Condition); 7] = [
    (200..300, Condition::Thunderstorm),
    (300..400, Condition::Drizzle),
    (500..600, Condition::Rain),
    (600..700, Condition::Snow),
    (700..800, Condition::Atmosphere),
    (800..801, Condition::Clear),
    (801..900, Condition::Cloudy),
];

impl Condition {
    /// Classify a provider condition code.
    pub fn classify(code: u16) -> Condition {
        RULES
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map_or(Condition::Unknown, |(_, condition)| *condition)
    }

    /// Fixed display glyph for the category.
    pub fn glyph(self) -> &'static str {
        match self {
            Condition::Thunderstorm => "💥",
            Condition::Drizzle => "💧",
            Condition::Rain => "💦",
            Condition::Snow => "⛄",
            Condition::Atmosphere => "🌀",
            Condition::Clear => "🔆",
            Condition::Cloudy => "💨",
            Condition::Unknown => "🌈",
        }
    }
}
