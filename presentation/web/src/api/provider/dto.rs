use poem_openapi::Object;
use serde::Deserialize;

use business::domain::provider::use_cases::create::CreateProviderParams;

#[derive(Debug, Clone, Default, Deserialize, Object)]
#[serde(default)]
pub struct ProviderFormRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<ProviderFormRequest> for CreateProviderParams {
    fn from(request: ProviderFormRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            email: request.email,
        }
    }
}
