use poem::http::StatusCode;
use poem_openapi::{
    Object,
    payload::{Html, Json},
};

use business::domain::errors::RepositoryError;

use crate::render::render_error;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse: Sized {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);

    /// The same error as an inline markup fragment for panel endpoints.
    fn into_error_fragment(self) -> (StatusCode, Html<String>) {
        let (status, Json(error)) = self.into_error_response();
        (
            status,
            Html(render_error(&error.message, Some(&error.name))),
        )
    }
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RepositoryError::Persistence => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
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
}
