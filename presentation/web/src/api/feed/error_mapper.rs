use poem::http::StatusCode;
use poem_openapi::payload::{Html, Json};

use business::domain::feed::errors::FeedError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::render::feed::FEED_ERROR;
use crate::render::render_error;

impl IntoErrorResponse for FeedError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            FeedError::Fetch(_) => "feed.fetch_failed",
            FeedError::Parse(_) => "feed.parse_failed",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                name: "FeedError".to_string(),
                message: message.to_string(),
            }),
        )
    }

    fn into_error_fragment(self) -> (StatusCode, Html<String>) {
        (
            StatusCode::BAD_GATEWAY,
            Html(render_error(FEED_ERROR, Some(&self.to_string()))),
        )
    }
}
