use business::domain::weather::model::{WeatherCondition, WeatherReport};

use super::escape::escape_html;

pub const CITY_REQUIRED: &str = "Please enter a city name";
pub const WEATHER_ERROR: &str = "Error loading weather data. Please try again later.";

pub fn condition_icon(condition: &WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Clear => "☀️",
        WeatherCondition::Clouds => "☁️",
        WeatherCondition::Rain => "🌧️",
        WeatherCondition::Drizzle => "🌦️",
        WeatherCondition::Thunderstorm => "⛈️",
        WeatherCondition::Snow => "❄️",
        WeatherCondition::Mist | WeatherCondition::Fog => "🌫️",
        WeatherCondition::Other(_) => "🌤️",
    }
}

pub fn render_weather(report: &WeatherReport) -> String {
    format!(
        r#"<div class="weather">
  <h3>{city}, {country}</h3>
  <div class="weather-icon">{icon}</div>
  <p class="weather-description">{description}</p>
  <div class="weather-info">
    <div class="weather-item"><div>Temperature</div><strong>{temperature:.1}°C</strong></div>
    <div class="weather-item"><div>Feels Like</div><strong>{feels_like:.1}°C</strong></div>
    <div class="weather-item"><div>Humidity</div><strong>{humidity:.0}%</strong></div>
    <div class="weather-item"><div>Wind Speed</div><strong>{wind:.1} m/s</strong></div>
    <div class="weather-item"><div>Pressure</div><strong>{pressure:.0} hPa</strong></div>
  </div>
</div>"#,
        city = escape_html(&report.city),
        country = escape_html(&report.country),
        icon = condition_icon(&report.condition),
        description = escape_html(&report.description),
        temperature = report.temperature,
        feels_like = report.feels_like,
        humidity = report.humidity,
        wind = report.wind_speed,
        pressure = report.pressure,
    )
}
