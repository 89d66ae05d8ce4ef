use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Form, Html},
};

use business::domain::catalog::entity::EntityId;
use business::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::error::IntoErrorResponse;
use crate::api::product::dto::ProductFormRequest;
use crate::api::tags::ApiTags;
use crate::render::{render_products, render_stats};

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
            stats_use_case,
        }
    }

    /// Stats line followed by the products panel, read after a mutation.
    async fn refreshed(&self) -> Result<String, ProductPanelResponse> {
        let products = self
            .get_all_use_case
            .execute()
            .await
            .map_err(ProductPanelResponse::from_error)?;
        let stats = self
            .stats_use_case
            .execute()
            .await
            .map_err(ProductPanelResponse::from_error)?;
        Ok(format!("{}{}", render_stats(&stats), render_products(&products)))
    }
}

/// Product catalog
///
/// Panels are returned as markup fragments.
#[OpenApi]
impl ProductApi {
    /// Products panel
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self) -> ProductPanelResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => ProductPanelResponse::Ok(Html(render_products(&products))),
            Err(err) => ProductPanelResponse::from_error(err),
        }
    }

    /// Add a product
    ///
    /// Validates the submitted form, stores the product and returns the
    /// refreshed stats and products panel.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, form: Form<ProductFormRequest>) -> ProductPanelResponse {
        let params = CreateProductParams {
            form: form.0.into(),
        };

        if let Err(err) = self.create_use_case.execute(params).await {
            return ProductPanelResponse::from_error(err);
        }

        match self.refreshed().await {
            Ok(html) => ProductPanelResponse::Created(Html(html)),
            Err(response) => response,
        }
    }

    /// Remove a product
    ///
    /// Unknown ids are ignored.
    #[oai(path = "/products/:id/delete", method = "post", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<EntityId>) -> ProductPanelResponse {
        if let Err(err) = self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            return ProductPanelResponse::from_error(err);
        }

        match self.refreshed().await {
            Ok(html) => ProductPanelResponse::Ok(Html(html)),
            Err(response) => response,
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 201)]
    Created(Html<String>),
    #[oai(status = 400)]
    BadRequest(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl ProductPanelResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, html) = err.into_error_fragment();
        match status.as_u16() {
            400 => ProductPanelResponse::BadRequest(html),
            _ => ProductPanelResponse::InternalError(html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};
    use poem_openapi::OpenApiService;

    use business::domain::catalog::stats::CatalogStats;
    use business::domain::errors::{RepositoryError, ValidationError};
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;

    mock! {
        pub Create {}

        #[async_trait]
        impl CreateProductUseCase for Create {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub GetAll {}

        #[async_trait]
        impl GetAllProductsUseCase for GetAll {
            async fn execute(&self) -> Result<Vec<Product>, ProductError>;
        }
    }

    mock! {
        pub Delete {}

        #[async_trait]
        impl DeleteProductUseCase for Delete {
            async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub Stats {}

        #[async_trait]
        impl GetCatalogStatsUseCase for Stats {
            async fn execute(&self) -> Result<CatalogStats, RepositoryError>;
        }
    }

    fn mouse() -> Product {
        Product::from_repository(
            1_700_000_000_000,
            "Mouse".to_string(),
            "Accessories".to_string(),
            25.0,
            10,
            String::new(),
        )
    }

    fn stats(product_count: usize) -> MockStats {
        let mut stats = MockStats::new();
        stats.expect_execute().returning(move || {
            Ok(CatalogStats {
                product_count,
                provider_count: 3,
            })
        });
        stats
    }

    fn client(
        create: MockCreate,
        get_all: MockGetAll,
        delete: MockDelete,
        stats: MockStats,
    ) -> TestClient<Route> {
        let api = ProductApi::new(
            Arc::new(create),
            Arc::new(get_all),
            Arc::new(delete),
            Arc::new(stats),
        );
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "1.0")))
    }

    async fn body(response: TestResponse) -> String {
        response.0.into_body().into_string().await.unwrap()
    }

    #[tokio::test]
    async fn should_return_refreshed_panel_after_create() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .withf(|params| params.form.name == "Mouse" && params.form.price == "25")
            .times(1)
            .returning(|_| Ok(mouse()));
        let mut get_all = MockGetAll::new();
        get_all.expect_execute().returning(|| Ok(vec![mouse()]));

        let client = client(create, get_all, MockDelete::new(), stats(1));
        let response = client
            .post("/products")
            .form(&[
                ("name", "Mouse"),
                ("category", "Accessories"),
                ("price", "25"),
                ("stock", "10"),
                ("description", ""),
            ])
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = body(response).await;
        assert!(body.contains("Mouse"));
        assert!(body.contains(r#"<span id="productCount">1</span>"#));
    }

    #[tokio::test]
    async fn should_reject_invalid_price_with_fragment() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .returning(|_| Err(ProductError::Validation(ValidationError::InvalidPrice)));

        let client = client(create, MockGetAll::new(), MockDelete::new(), MockStats::new());
        let response = client
            .post("/products")
            .form(&[("name", "Mouse"), ("price", "abc"), ("stock", "1")])
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(body(response).await.contains("product.invalid_price"));
    }

    #[tokio::test]
    async fn should_remove_product_by_path_id() {
        let mut delete = MockDelete::new();
        delete
            .expect_execute()
            .withf(|params| params.id == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut get_all = MockGetAll::new();
        get_all.expect_execute().returning(|| Ok(vec![]));

        let client = client(MockCreate::new(), get_all, delete, stats(0));
        let response = client.post("/products/2/delete").send().await;

        response.assert_status_is_ok();
        assert!(
            body(response)
                .await
                .contains("No products available. Add your first product below!")
        );
    }
}
