#[derive(Debug, PartialEq, thiserror::Error)]
pub enum WeatherError {
    #[error("weather.city_empty")]
    CityEmpty,
    #[error("weather.unavailable: {0}")]
    Unavailable(String),
}
