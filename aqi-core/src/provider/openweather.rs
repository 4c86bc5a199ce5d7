use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    AqiError,
    model::{AqiResult, Place, PollutantReading, WeatherSnapshot},
};

use super::AirQualityProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const GEOCODING_PATH: &str = "/geo/1.0/direct";
const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";
const WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// GET `path` with `query` plus the API key and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(endpoint, %url, "calling OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }

    async fn fetch_air_pollution(&self, lat: &str, lon: &str) -> Result<OwAirPollutionSample> {
        let parsed: OwAirPollutionResponse = self
            .get_json("air pollution", AIR_POLLUTION_PATH, &[("lat", lat), ("lon", lon)])
            .await?;

        parsed
            .list
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather air pollution response contained no data"))
    }

    async fn fetch_weather(&self, lat: &str, lon: &str) -> Result<WeatherSnapshot> {
        let parsed: OwWeatherResponse = self
            .get_json(
                "weather",
                WEATHER_PATH,
                &[("lat", lat), ("lon", lon), ("units", "metric")],
            )
            .await?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather weather response contained no conditions"))?;

        Ok(WeatherSnapshot {
            temperature_c: parsed.main.temp,
            description: condition.description,
            icon_code: condition.icon,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoMatch {
    name: String,
    country: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwAqiMain {
    aqi: i64,
}

#[derive(Debug, Deserialize)]
struct OwAirPollutionSample {
    dt: i64,
    main: OwAqiMain,
    components: PollutantReading,
}

#[derive(Debug, Deserialize)]
struct OwAirPollutionResponse {
    list: Vec<OwAirPollutionSample>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWeatherResponse {
    main: OwMain,
    weather: Vec<OwCondition>,
}

#[async_trait]
impl AirQualityProvider for OpenWeatherProvider {
    async fn resolve_city(&self, city: &str) -> Result<Place, AqiError> {
        let matches: Vec<OwGeoMatch> = self
            .get_json("geocoding", GEOCODING_PATH, &[("q", city), ("limit", "1")])
            .await?;

        let first = matches.into_iter().next().ok_or(AqiError::NotFound)?;

        Ok(Place {
            name: first.name,
            country: first.country,
            lat: first.lat,
            lon: first.lon,
        })
    }

    async fn fetch_aqi_and_weather(
        &self,
        lat: f64,
        lon: f64,
        place_label: &str,
    ) -> Result<AqiResult, AqiError> {
        let (lat, lon) = (lat.to_string(), lon.to_string());

        let sample = self.fetch_air_pollution(&lat, &lon).await?;
        let updated_at = DateTime::from_timestamp(sample.dt, 0)
            .ok_or_else(|| anyhow!("OpenWeather air pollution timestamp {} is out of range", sample.dt))?;

        let weather = self.fetch_weather(&lat, &lon).await?;

        let result = AqiResult::new(
            place_label,
            sample.main.aqi,
            updated_at,
            sample.components,
            weather,
        );
        if result.level.is_unknown() {
            warn!(aqi = result.aqi_index, "OpenWeather returned an AQI outside 1..=5");
        }

        Ok(result)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
