//! HTTP surface: by-city and by-coordinates lookups plus a health probe.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    AqiError, AqiResult,
    provider::{AirQualityProvider, aqi_for_city, aqi_for_coords},
};

#[derive(Clone)]
struct AppState {
    provider: Arc<dyn AirQualityProvider>,
}

pub fn router(provider: Arc<dyn AirQualityProvider>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/aqi/city/{city}", get(aqi_by_city_handler))
        .route("/api/aqi/coords", get(aqi_by_coords_handler))
        .with_state(AppState { provider })
}

#[derive(Debug, Deserialize)]
pub struct CoordsQuery {
    pub lat: f64,
    pub lon: f64,
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn aqi_by_city_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<AqiResult>, AqiError> {
    info!(%city, "AQI lookup by city");
    let result = aqi_for_city(state.provider.as_ref(), &city).await?;
    Ok(Json(result))
}

async fn aqi_by_coords_handler(
    State(state): State<AppState>,
    query: Result<Query<CoordsQuery>, QueryRejection>,
) -> Result<Json<AqiResult>, AqiError> {
    let Query(coords) = query.map_err(|rejection| AqiError::InvalidInput(rejection.body_text()))?;

    info!(lat = coords.lat, lon = coords.lon, "AQI lookup by coordinates");
    let result = aqi_for_coords(state.provider.as_ref(), coords.lat, coords.lon).await?;
    Ok(Json(result))
}

impl IntoResponse for AqiError {
    fn into_response(self) -> Response {
        let status = match &self {
            AqiError::NotFound | AqiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AqiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            warn!(error = %self, "AQI lookup failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
