#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Other(String),
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Clear => write!(f, "Clear"),
            WeatherCondition::Clouds => write!(f, "Clouds"),
            WeatherCondition::Rain => write!(f, "Rain"),
            WeatherCondition::Drizzle => write!(f, "Drizzle"),
            WeatherCondition::Thunderstorm => write!(f, "Thunderstorm"),
            WeatherCondition::Snow => write!(f, "Snow"),
            WeatherCondition::Mist => write!(f, "Mist"),
            WeatherCondition::Fog => write!(f, "Fog"),
            WeatherCondition::Other(label) => write!(f, "{}", label),
        }
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Drizzle" => WeatherCondition::Drizzle,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Snow" => WeatherCondition::Snow,
            "Mist" => WeatherCondition::Mist,
            "Fog" => WeatherCondition::Fog,
            other => WeatherCondition::Other(other.to_string()),
        })
    }
}

/// Current conditions for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub feels_like: f64,
    /// Percent.
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// m/s.
    pub wind_speed: f64,
    pub condition: WeatherCondition,
    pub description: String,
}
