use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Form, Html, Json},
};

use business::domain::session::use_cases::get_current::GetCurrentSessionUseCase;
use business::domain::session::use_cases::log_in::{LogInParams, LogInUseCase};
use business::domain::session::use_cases::log_out::LogOutUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{LoginRequest, SessionResponse};
use crate::api::tags::ApiTags;
use crate::render::render_session;

pub struct SessionApi {
    get_current_use_case: Arc<dyn GetCurrentSessionUseCase>,
    log_in_use_case: Arc<dyn LogInUseCase>,
    log_out_use_case: Arc<dyn LogOutUseCase>,
}

impl SessionApi {
    pub fn new(
        get_current_use_case: Arc<dyn GetCurrentSessionUseCase>,
        log_in_use_case: Arc<dyn LogInUseCase>,
        log_out_use_case: Arc<dyn LogOutUseCase>,
    ) -> Self {
        Self {
            get_current_use_case,
            log_in_use_case,
            log_out_use_case,
        }
    }
}

/// Session
///
/// A single display-name session shared by the whole app.
#[OpenApi]
impl SessionApi {
    /// Current session
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn get_session(&self) -> GetSessionResponse {
        match self.get_current_use_case.execute().await {
            Ok(session) => GetSessionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSessionResponse::InternalError(json)
            }
        }
    }

    /// Log in
    ///
    /// A blank name leaves the session unchanged.
    #[oai(path = "/session/login", method = "post", tag = "ApiTags::Session")]
    async fn log_in(&self, form: Form<LoginRequest>) -> SessionPanelResponse {
        let params = LogInParams { name: form.0.name };
        match self.log_in_use_case.execute(params).await {
            Ok(session) => SessionPanelResponse::Ok(Html(render_session(&session))),
            Err(err) => SessionPanelResponse::InternalError(err.into_error_fragment().1),
        }
    }

    /// Log out
    #[oai(path = "/session/logout", method = "post", tag = "ApiTags::Session")]
    async fn log_out(&self) -> SessionPanelResponse {
        match self.log_out_use_case.execute().await {
            Ok(session) => SessionPanelResponse::Ok(Html(render_session(&session))),
            Err(err) => SessionPanelResponse::InternalError(err.into_error_fragment().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SessionPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}
