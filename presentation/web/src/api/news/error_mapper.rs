use poem::http::StatusCode;
use poem_openapi::payload::{Html, Json};

use business::domain::news::errors::NewsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::render::news::NEWS_ERROR;
use crate::render::render_error;

impl IntoErrorResponse for NewsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            NewsError::Fetch(_) => "news.fetch_failed",
            NewsError::FeedStatus(_) => "news.feed_status",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                name: "NewsError".to_string(),
                message: message.to_string(),
            }),
        )
    }

    fn into_error_fragment(self) -> (StatusCode, Html<String>) {
        (
            StatusCode::BAD_GATEWAY,
            Html(render_error(NEWS_ERROR, Some(&self.to_string()))),
        )
    }
}
