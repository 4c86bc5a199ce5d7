//! Core library for the `aqi` air quality facade.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client: city resolution and AQI/weather aggregation
//! - The static AQI severity table
//! - Shared domain models and the lookup error type
//! - The HTTP router exposing by-city and by-coordinates lookups
//!
//! It is used by `aqi-cli`, which owns the process lifecycle.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod severity;

pub use config::{Config, ServerConfig};
pub use error::AqiError;
pub use model::{AqiResult, Place, PollutantReading, WeatherSnapshot};
pub use provider::{AirQualityProvider, COORDS_PLACE_LABEL, aqi_for_city, aqi_for_coords};
pub use severity::SeverityLevel;
