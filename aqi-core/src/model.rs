use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::severity::SeverityLevel;

/// Display format for `AqiResult::updated_at`, e.g. `Tue Nov 14 22:13:20 UTC 2023`.
pub const UPDATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// First geocoding match for a city name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    /// Label used as `AqiResult::place`, e.g. "London, GB".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Pollutant symbol (`co`, `pm2_5`, ...) to concentration, copied from upstream.
pub type PollutantReading = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    #[serde(rename = "temperature")]
    pub temperature_c: f64,
    pub description: String,
    #[serde(rename = "icon")]
    pub icon_code: String,
}

/// Consolidated air quality and weather for one place.
#[derive(Debug, Clone, Serialize)]
pub struct AqiResult {
    pub place: String,
    #[serde(rename = "aqi")]
    pub aqi_index: i64,
    pub level: &'static SeverityLevel,
    #[serde(rename = "updated", serialize_with = "serialize_updated_at")]
    pub updated_at: DateTime<Utc>,
    pub pollutants: PollutantReading,
    pub weather: WeatherSnapshot,
}

impl AqiResult {
    pub fn new(
        place: impl Into<String>,
        aqi_index: i64,
        updated_at: DateTime<Utc>,
        pollutants: PollutantReading,
        weather: WeatherSnapshot,
    ) -> Self {
        Self {
            place: place.into(),
            aqi_index,
            level: SeverityLevel::for_index(aqi_index),
            updated_at,
            pollutants,
            weather,
        }
    }
}

fn serialize_updated_at<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(UPDATED_AT_FORMAT))
}
