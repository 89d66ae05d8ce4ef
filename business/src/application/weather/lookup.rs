use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::weather::errors::WeatherError;
use crate::domain::weather::model::WeatherReport;
use crate::domain::weather::services::WeatherService;
use crate::domain::weather::use_cases::lookup::{LookupWeatherParams, LookupWeatherUseCase};

pub struct LookupWeatherUseCaseImpl {
    pub service: Arc<dyn WeatherService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupWeatherUseCase for LookupWeatherUseCaseImpl {
    async fn execute(&self, params: LookupWeatherParams) -> Result<WeatherReport, WeatherError> {
        let city = params.city.trim();
        if city.is_empty() {
            return Err(WeatherError::CityEmpty);
        }

        self.logger.info(&format!("Looking up weather for {}", city));
        self.service.current(city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::model::WeatherCondition;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Weather {}

        #[async_trait]
        impl WeatherService for Weather {
            async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_reject_blank_city_without_calling_service() {
        let mut service = MockWeather::new();
        service.expect_current().never();

        let use_case = LookupWeatherUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupWeatherParams {
                city: "  ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WeatherError::CityEmpty));
    }

    #[tokio::test]
    async fn should_pass_trimmed_city_to_service() {
        let mut service = MockWeather::new();
        service
            .expect_current()
            .with(eq("Hanoi"))
            .returning(|city| {
                Ok(WeatherReport {
                    city: city.to_string(),
                    country: "VN".to_string(),
                    temperature: 30.0,
                    feels_like: 32.0,
                    humidity: 70.0,
                    pressure: 1012.0,
                    wind_speed: 3.5,
                    condition: WeatherCondition::Clear,
                    description: "partly cloudy".to_string(),
                })
            });

        let use_case = LookupWeatherUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(LookupWeatherParams {
                city: " Hanoi ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(report.city, "Hanoi");
    }
}
