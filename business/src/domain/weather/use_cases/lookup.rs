use async_trait::async_trait;

use crate::domain::weather::errors::WeatherError;
use crate::domain::weather::model::WeatherReport;

pub struct LookupWeatherParams {
    pub city: String,
}

#[async_trait]
pub trait LookupWeatherUseCase: Send + Sync {
    async fn execute(&self, params: LookupWeatherParams) -> Result<WeatherReport, WeatherError>;
}
