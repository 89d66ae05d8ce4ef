use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Html};

use business::domain::weather::use_cases::lookup::{LookupWeatherParams, LookupWeatherUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;
use crate::render::render_weather;

pub struct WeatherApi {
    lookup_use_case: Arc<dyn LookupWeatherUseCase>,
}

impl WeatherApi {
    pub fn new(lookup_use_case: Arc<dyn LookupWeatherUseCase>) -> Self {
        Self { lookup_use_case }
    }
}

#[OpenApi]
impl WeatherApi {
    /// Current weather for a city
    #[oai(path = "/weather", method = "get", tag = "ApiTags::Weather")]
    async fn get_weather(&self, city: Query<Option<String>>) -> WeatherPanelResponse {
        let params = LookupWeatherParams {
            city: city.0.unwrap_or_default(),
        };

        match self.lookup_use_case.execute(params).await {
            Ok(report) => WeatherPanelResponse::Ok(Html(render_weather(&report))),
            Err(err) => {
                let (status, html) = err.into_error_fragment();
                match status.as_u16() {
                    400 => WeatherPanelResponse::BadRequest(html),
                    _ => WeatherPanelResponse::BadGateway(html),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum WeatherPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 400)]
    BadRequest(Html<String>),
    #[oai(status = 502)]
    BadGateway(Html<String>),
}
