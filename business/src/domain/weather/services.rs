use async_trait::async_trait;

use super::errors::WeatherError;
use super::model::WeatherReport;

/// Service port for current weather, keyed by city name.
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
