use std::sync::Arc;

use axum::extract::FromRef;
use shared::utilities::{config::Config, errors::AppError};
use tracing::info;

use crate::{
    features::{pages::detail_view::PropertySource, properties::service::PropertyService},
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub property_service: PropertyService,
    pub property_source: Arc<dyn PropertySource>,
}

impl AppState {
    /// Detail pages read from `PUBLIC_API_URL` when it is set, otherwise
    /// straight from the local service.
    pub fn new(config: Config, property_service: PropertyService) -> Result<Self, AppError> {
        let property_source: Arc<dyn PropertySource> = match &config.public_api_url {
            Some(url) => {
                info!("detail pages read listings from {url}");
                Arc::new(ApiClient::new(ApiClient::build_http_client()?, url)?)
            }
            None => Arc::new(property_service.clone()),
        };

        Ok(Self {
            config,
            property_service,
            property_source,
        })
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for PropertyService {
    fn from_ref(state: &AppState) -> Self {
        state.property_service.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PropertySource> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.property_source)
    }
}
