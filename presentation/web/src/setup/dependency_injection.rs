use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::StoreCatalogRepository;
use persistence::session::repository::StoreSessionRepository;
use persistence::store::KeyValueStore;

use feeds::client::FeedClient;
use feeds::news_feed::RssNewsFeed;
use feeds::product_feed::XmlProductFeed;
use feeds::weather::SimulatedWeatherService;

use business::application::catalog::get_stats::GetCatalogStatsUseCaseImpl;
use business::application::feed::load::LoadFeedUseCaseImpl;
use business::application::news::load::LoadNewsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::provider::create::CreateProviderUseCaseImpl;
use business::application::provider::delete::DeleteProviderUseCaseImpl;
use business::application::provider::get_all::GetAllProvidersUseCaseImpl;
use business::application::session::get_current::GetCurrentSessionUseCaseImpl;
use business::application::session::log_in::LogInUseCaseImpl;
use business::application::session::log_out::LogOutUseCaseImpl;
use business::application::weather::lookup::LookupWeatherUseCaseImpl;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::provider::model::Provider;
use business::domain::session::repository::SessionRepository;

use crate::api::feed::routes::FeedApi;
use crate::api::health::routes::HealthApi;
use crate::api::news::routes::NewsApi;
use crate::api::page::routes::PageApi;
use crate::api::product::routes::ProductApi;
use crate::api::provider::routes::ProviderApi;
use crate::api::session::routes::SessionApi;
use crate::api::stats::routes::StatsApi;
use crate::api::weather::routes::WeatherApi;
use crate::config::feeds_config::FeedsConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub page_api: PageApi,
    pub product_api: ProductApi,
    pub provider_api: ProviderApi,
    pub stats_api: StatsApi,
    pub session_api: SessionApi,
    pub feed_api: FeedApi,
    pub weather_api: WeatherApi,
    pub news_api: NewsApi,
}

impl DependencyContainer {
    /// Loads (or seeds) both collections and restores the session once.
    pub fn new(store: Arc<dyn KeyValueStore>, feeds: &FeedsConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository: Arc<dyn CatalogRepository<Product>> =
            Arc::new(StoreCatalogRepository::<Product>::load_or_seed(store.clone())?);
        let provider_repository: Arc<dyn CatalogRepository<Provider>> =
            Arc::new(StoreCatalogRepository::<Provider>::load_or_seed(store.clone())?);
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(StoreSessionRepository::restore(store));

        let client = FeedClient::new(feeds.timeout);
        let product_feed = Arc::new(XmlProductFeed::new(
            client.clone(),
            feeds.product_feed_url.clone(),
        ));
        let news_feed = Arc::new(RssNewsFeed::new(
            client,
            feeds.news_rss_url.clone(),
            feeds.rss2json_endpoint.clone(),
        ));
        let weather_service = Arc::new(SimulatedWeatherService::new());

        // Catalog use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_providers = Arc::new(GetAllProvidersUseCaseImpl {
            repository: provider_repository.clone(),
            logger: logger.clone(),
        });
        let create_provider = Arc::new(CreateProviderUseCaseImpl {
            repository: provider_repository.clone(),
            logger: logger.clone(),
        });
        let delete_provider = Arc::new(DeleteProviderUseCaseImpl {
            repository: provider_repository.clone(),
            logger: logger.clone(),
        });
        let get_stats = Arc::new(GetCatalogStatsUseCaseImpl {
            products: product_repository,
            providers: provider_repository,
            logger: logger.clone(),
        });

        // Session use cases
        let get_session = Arc::new(GetCurrentSessionUseCaseImpl {
            repository: session_repository.clone(),
        });
        let log_in = Arc::new(LogInUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let log_out = Arc::new(LogOutUseCaseImpl {
            repository: session_repository,
            logger: logger.clone(),
        });

        // Collaborators
        let load_feed = Arc::new(LoadFeedUseCaseImpl {
            feed: product_feed,
            logger: logger.clone(),
        });
        let lookup_weather = Arc::new(LookupWeatherUseCaseImpl {
            service: weather_service,
            logger: logger.clone(),
        });
        let load_news = Arc::new(LoadNewsUseCaseImpl {
            feed: news_feed,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            page_api: PageApi::new(
                get_all_products.clone(),
                get_all_providers.clone(),
                get_stats.clone(),
                get_session.clone(),
            ),
            product_api: ProductApi::new(
                create_product,
                get_all_products,
                delete_product,
                get_stats.clone(),
            ),
            provider_api: ProviderApi::new(
                create_provider,
                get_all_providers,
                delete_provider,
                get_stats.clone(),
            ),
            stats_api: StatsApi::new(get_stats),
            session_api: SessionApi::new(get_session, log_in, log_out),
            feed_api: FeedApi::new(load_feed),
            weather_api: WeatherApi::new(lookup_weather),
            news_api: NewsApi::new(load_news),
        })
    }
}
