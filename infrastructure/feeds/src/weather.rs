use async_trait::async_trait;
use rand::Rng;

use business::domain::weather::errors::WeatherError;
use business::domain::weather::model::{WeatherCondition, WeatherReport};
use business::domain::weather::services::WeatherService;

const CONDITIONS: [WeatherCondition; 3] = [
    WeatherCondition::Clear,
    WeatherCondition::Clouds,
    WeatherCondition::Rain,
];

/// Fabricates plausible tropical conditions for any city name.
#[derive(Default)]
pub struct SimulatedWeatherService;

impl SimulatedWeatherService {
    pub fn new() -> Self {
        Self
    }
}

pub fn fabricate<R: Rng>(city: &str, rng: &mut R) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        country: "VN".to_string(),
        temperature: rng.random_range(28.0..33.0),
        feels_like: rng.random_range(30.0..35.0),
        humidity: rng.random_range(60.0..80.0),
        pressure: rng.random_range(1010.0..1020.0),
        wind_speed: rng.random_range(2.0..7.0),
        condition: CONDITIONS[rng.random_range(0..CONDITIONS.len())].clone(),
        description: "partly cloudy".to_string(),
    }
}

#[async_trait]
impl WeatherService for SimulatedWeatherService {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        Ok(fabricate(city, &mut rand::rng()))
    }
}
