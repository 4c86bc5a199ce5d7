use thiserror::Error;

/// Failure of an AQI lookup.
#[derive(Debug, Error)]
pub enum AqiError {
    /// Geocoding returned no match for the city name.
    #[error("City not found")]
    NotFound,

    /// Network failure, non-success status, or an unexpected response shape.
    #[error("{0:#}")]
    Upstream(anyhow::Error),

    /// Malformed request parameters.
    #[error("{0}")]
    InvalidInput(String),
}

impl From<anyhow::Error> for AqiError {
    fn from(err: anyhow::Error) -> Self {
        AqiError::Upstream(err)
    }
}
