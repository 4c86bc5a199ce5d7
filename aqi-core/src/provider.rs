use crate::{
    AqiError, AqiResult, Config, Place, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::info;

pub mod openweather;

/// Place label used when the caller supplies raw coordinates.
pub const COORDS_PLACE_LABEL: &str = "Your Location";

/// Upstream source of geocoding, air pollution and weather data.
#[async_trait]
pub trait AirQualityProvider: Send + Sync + Debug {
    /// Resolve a city name to its first geocoding match.
    async fn resolve_city(&self, city: &str) -> Result<Place, AqiError>;

    /// Fetch air pollution and current weather for a coordinate pair and merge
    /// them into one result labelled `place_label`. Either both upstream calls
    /// succeed or the whole lookup fails.
    async fn fetch_aqi_and_weather(
        &self,
        lat: f64,
        lon: f64,
        place_label: &str,
    ) -> Result<AqiResult, AqiError>;
}

/// City name -> place -> AQI result.
pub async fn aqi_for_city(
    provider: &dyn AirQualityProvider,
    city: &str,
) -> Result<AqiResult, AqiError> {
    let place = provider.resolve_city(city).await?;
    info!(city, place = %place.label(), lat = place.lat, lon = place.lon, "resolved city");

    provider.fetch_aqi_and_weather(place.lat, place.lon, &place.label()).await
}

pub async fn aqi_for_coords(
    provider: &dyn AirQualityProvider,
    lat: f64,
    lon: f64,
) -> Result<AqiResult, AqiError> {
    provider.fetch_aqi_and_weather(lat, lon, COORDS_PLACE_LABEL).await
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn AirQualityProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::with_base_url(api_key.to_owned(), config.base_url())))
}
