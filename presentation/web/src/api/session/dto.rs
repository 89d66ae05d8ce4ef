use poem_openapi::Object;
use serde::Deserialize;

use business::domain::session::model::Session;

#[derive(Debug, Clone, Default, Deserialize, Object)]
#[serde(default)]
pub struct LoginRequest {
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub logged_in: bool,
    #[oai(skip_serializing_if_is_none)]
    pub user: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            logged_in: session.is_logged_in(),
            user: session.user().map(str::to_string),
        }
    }
}
