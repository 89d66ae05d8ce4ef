use poem::http::StatusCode;
use poem_openapi::payload::{Html, Json};

use business::domain::weather::errors::WeatherError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::render::render_error;
use crate::render::weather::{CITY_REQUIRED, WEATHER_ERROR};

impl IntoErrorResponse for WeatherError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WeatherError::CityEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "weather.city_empty",
            ),
            WeatherError::Unavailable(_) => (
                StatusCode::BAD_GATEWAY,
                "WeatherError",
                "weather.unavailable",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }

    fn into_error_fragment(self) -> (StatusCode, Html<String>) {
        match self {
            WeatherError::CityEmpty => (
                StatusCode::BAD_REQUEST,
                Html(render_error(CITY_REQUIRED, None)),
            ),
            WeatherError::Unavailable(cause) => (
                StatusCode::BAD_GATEWAY,
                Html(render_error(WEATHER_ERROR, Some(&cause))),
            ),
        }
    }
}
