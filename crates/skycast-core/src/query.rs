//! Value types describing a single weather lookup and the URL it produces.

use reqwest::Url;

use crate::error::{Error, Result};

pub const WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
pub const FORECAST_URL: &str = "http://api.openweathermap.org/data/2.5/forecast";

/// Three-hour forecast blocks per day.
const BLOCKS_PER_DAY: f64 = 8.0;

/// Where to look the weather up: a city name (optionally qualified with an
/// ISO country code) or resolved coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Named {
        city: String,
        country: Option<String>,
    },
    Coords {
        lat: f64,
        lon: f64,
    },
}

impl Location {
    pub fn named(city: impl Into<String>) -> Self {
        Location::Named {
            city: city.into(),
            country: None,
        }
    }

    pub fn coords(lat: f64, lon: f64) -> Self {
        Location::Coords { lat, lon }
    }
}

/// Measurement system for the outbound request and the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix for rendered output.
    pub fn degrees(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    /// Wind speed label for rendered output.
    pub fn speed(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

/// A fully-specified lookup. Immutable once constructed; `build_url` is a
/// pure function of this value and the API key.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub location: Location,
    pub units: Units,
    pub forecast: bool,
    /// Number of three-hour blocks requested; only sent on forecast queries.
    pub blocks: u32,
}

impl WeatherQuery {
    /// A current-weather lookup.
    pub fn current(location: Location, units: Units) -> Self {
        WeatherQuery {
            location,
            units,
            forecast: false,
            blocks: 0,
        }
    }

    /// A forecast lookup covering `days` days at three-hour resolution.
    /// Half days are allowed; the block count is `round(8 × days)`.
    pub fn forecast(location: Location, units: Units, days: f64) -> Self {
        WeatherQuery {
            location,
            units,
            forecast: true,
            blocks: (BLOCKS_PER_DAY * days).round() as u32,
        }
    }

    /// Build the outbound URL. Deterministic: identical inputs always yield
    /// a byte-identical URL.
    pub fn build_url(&self, api_key: &str) -> Result<Url> {
        let base = if self.forecast {
            FORECAST_URL
        } else {
            WEATHER_URL
        };
        let mut url =
            Url::parse(base).map_err(|e| Error::Config(format!("bad endpoint URL: {e}")))?;

        {
            let mut qp = url.query_pairs_mut();
            match &self.location {
                Location::Named { city, country } => {
                    let q = match country {
                        Some(code) => format!("{city},{code}"),
                        None => city.clone(),
                    };
                    qp.append_pair("q", &q);
                }
                Location::Coords { lat, lon } => {
                    qp.append_pair("lat", &lat.to_string());
                    qp.append_pair("lon", &lon.to_string());
                }
            }
            qp.append_pair("appid", api_key);
            qp.append_pair("units", self.units.as_str());
            if self.forecast {
                qp.append_pair("cnt", &self.blocks.to_string());
            }
        }

        Ok(url)
    }
}
