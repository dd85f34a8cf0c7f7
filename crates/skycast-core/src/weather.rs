//! Weather lookup client and the decoded response models.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::http;
use crate::query::WeatherQuery;

/// Client for the current-weather and forecast endpoints.
#[derive(Debug)]
pub struct WeatherClient {
    api_key: String,
    client: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        WeatherClient {
            api_key,
            client: Client::new(),
        }
    }

    /// Fetch a single current-weather observation.
    pub fn current(&self, query: &WeatherQuery) -> Result<Observation> {
        debug!("fetching current weather for {:?}", query.location);
        let url = query.build_url(&self.api_key)?;
        http::get_json(&self.client, &url)
    }

    /// Fetch a forecast series; entries come back in chronological order
    /// and are kept that way.
    pub fn forecast(&self, query: &WeatherQuery) -> Result<ForecastSeries> {
        debug!(
            "fetching {} forecast blocks for {:?}",
            query.blocks, query.location
        );
        let url = query.build_url(&self.api_key)?;
        http::get_json(&self.client, &url)
    }
}

/// One decoded current-weather response.
#[derive(Debug, Deserialize)]
pub struct Observation {
    pub name: String,
    pub main: MainMetrics,
    pub weather: Vec<ConditionInfo>,
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<Rain>,
}

impl Observation {
    /// Condition code and description of the leading weather entry.
    /// The provider always sends at least one; an empty list classifies as
    /// unknown rather than failing the whole lookup.
    pub fn condition(&self) -> (u16, &str) {
        self.weather
            .first()
            .map_or((0, ""), |info| (info.id, info.description.as_str()))
    }
}

/// Decoded 3-hour forecast response.
#[derive(Debug, Deserialize)]
pub struct ForecastSeries {
    pub city: City,
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct City {
    pub name: String,
}

/// One 3-hour forecast block.
#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the block, seconds.
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<ConditionInfo>,
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<Rain>,
}

impl ForecastEntry {
    pub fn condition(&self) -> (u16, &str) {
        self.weather
            .first()
            .map_or((0, ""), |info| (info.id, info.description.as_str()))
    }
}

#[derive(Debug, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct ConditionInfo {
    pub id: u16,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Rain volume; the provider reports it per 3-hour window, in liters (mm).
#[derive(Debug, Deserialize)]
pub struct Rain {
    #[serde(rename = "3h")]
    pub three_hour: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_FIXTURE: &str = r#"{
        "coord": {"lon": -87.65, "lat": 41.85},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 71.6, "feels_like": 70.9, "temp_min": 68.2, "temp_max": 74.3,
                 "pressure": 1015, "humidity": 48},
        "wind": {"speed": 9.22, "deg": 180},
        "dt": 1661870592,
        "name": "Chicago",
        "cod": 200
    }"#;

    #[test]
    fn current_response_decodes() {
        let obs: Observation = serde_json::from_str(CURRENT_FIXTURE).unwrap();
        assert_eq!(obs.name, "Chicago");
        assert_eq!(obs.condition(), (800, "clear sky"));
        assert_eq!(obs.main.humidity, 48);
        assert!(obs.rain.is_none());
    }

    #[test]
    fn rain_volume_decodes_from_3h_key() {
        let body = r#"{
            "weather": [{"id": 501, "description": "moderate rain"}],
            "main": {"temp": 54.0, "temp_min": 50.0, "temp_max": 55.4, "humidity": 93},
            "wind": {"speed": 12.5},
            "rain": {"3h": 2.54},
            "name": "Seattle"
        }"#;
        let obs: Observation = serde_json::from_str(body).unwrap();
        let rain = obs.rain.expect("rain volume must decode");
        assert!((rain.three_hour - 2.54).abs() < f64::EPSILON);
    }

    #[test]
    fn forecast_response_decodes_in_order() {
        let body = r#"{
            "cod": "200",
            "list": [
                {"dt": 1661871600,
                 "main": {"temp": 68.0, "temp_min": 66.0, "temp_max": 68.0, "humidity": 60},
                 "weather": [{"id": 802, "description": "scattered clouds"}],
                 "wind": {"speed": 7.0}},
                {"dt": 1661882400,
                 "main": {"temp": 64.4, "temp_min": 62.0, "temp_max": 64.4, "humidity": 71},
                 "weather": [{"id": 500, "description": "light rain"}],
                 "wind": {"speed": 5.5},
                 "rain": {"3h": 0.32}}
            ],
            "city": {"name": "Chicago", "country": "US"}
        }"#;
        let series: ForecastSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.city.name, "Chicago");
        assert_eq!(series.list.len(), 2);
        assert!(series.list[0].dt < series.list[1].dt);
        assert_eq!(series.list[1].condition(), (500, "light rain"));
    }

    #[test]
    fn missing_weather_entry_classifies_as_unknown() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 60.0, "temp_min": 58.0, "temp_max": 61.0, "humidity": 50},
            "wind": {"speed": 3.0},
            "name": "Nowhere"
        }"#;
        let obs: Observation = serde_json::from_str(body).unwrap();
        assert_eq!(obs.condition(), (0, ""));
    }

    #[test]
    fn truncated_body_is_a_decode_error() {
        let result: std::result::Result<Observation, _> =
            serde_json::from_str(r#"{"name": "Chi"#);
        assert!(result.is_err());
    }
}
