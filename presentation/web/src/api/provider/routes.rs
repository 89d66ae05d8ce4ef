use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Form, Html},
};

use business::domain::catalog::entity::EntityId;
use business::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;
use business::domain::provider::use_cases::create::CreateProviderUseCase;
use business::domain::provider::use_cases::delete::{DeleteProviderParams, DeleteProviderUseCase};
use business::domain::provider::use_cases::get_all::GetAllProvidersUseCase;

use crate::api::error::IntoErrorResponse;
use crate::api::provider::dto::ProviderFormRequest;
use crate::api::tags::ApiTags;
use crate::render::{render_providers, render_stats};

pub struct ProviderApi {
    create_use_case: Arc<dyn CreateProviderUseCase>,
    get_all_use_case: Arc<dyn GetAllProvidersUseCase>,
    delete_use_case: Arc<dyn DeleteProviderUseCase>,
    stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
}

impl ProviderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProviderUseCase>,
        get_all_use_case: Arc<dyn GetAllProvidersUseCase>,
        delete_use_case: Arc<dyn DeleteProviderUseCase>,
        stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
            stats_use_case,
        }
    }

    async fn refreshed(&self) -> Result<String, ProviderPanelResponse> {
        let providers = self
            .get_all_use_case
            .execute()
            .await
            .map_err(ProviderPanelResponse::from_error)?;
        let stats = self
            .stats_use_case
            .execute()
            .await
            .map_err(ProviderPanelResponse::from_error)?;
        Ok(format!("{}{}", render_stats(&stats), render_providers(&providers)))
    }
}

/// Provider directory
#[OpenApi]
impl ProviderApi {
    /// Providers panel
    #[oai(path = "/providers", method = "get", tag = "ApiTags::Providers")]
    async fn get_providers(&self) -> ProviderPanelResponse {
        match self.get_all_use_case.execute().await {
            Ok(providers) => ProviderPanelResponse::Ok(Html(render_providers(&providers))),
            Err(err) => ProviderPanelResponse::from_error(err),
        }
    }

    /// Add a provider
    ///
    /// All fields are trimmed; none are required.
    #[oai(path = "/providers", method = "post", tag = "ApiTags::Providers")]
    async fn create_provider(&self, form: Form<ProviderFormRequest>) -> ProviderPanelResponse {
        if let Err(err) = self.create_use_case.execute(form.0.into()).await {
            return ProviderPanelResponse::from_error(err);
        }

        match self.refreshed().await {
            Ok(html) => ProviderPanelResponse::Created(Html(html)),
            Err(response) => response,
        }
    }

    /// Remove a provider
    #[oai(path = "/providers/:id/delete", method = "post", tag = "ApiTags::Providers")]
    async fn delete_provider(&self, id: Path<EntityId>) -> ProviderPanelResponse {
        if let Err(err) = self
            .delete_use_case
            .execute(DeleteProviderParams { id: id.0 })
            .await
        {
            return ProviderPanelResponse::from_error(err);
        }

        match self.refreshed().await {
            Ok(html) => ProviderPanelResponse::Ok(Html(html)),
            Err(response) => response,
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProviderPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 201)]
    Created(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl ProviderPanelResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (_, html) = err.into_error_fragment();
        ProviderPanelResponse::InternalError(html)
    }
}
