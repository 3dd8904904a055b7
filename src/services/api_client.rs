use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::utilities::errors::AppError;
use tracing::{debug, error};
use url::Url;

use crate::features::{pages::detail_view::PropertySource, properties::schemas::Property};

/// Fetches listings from a running instance of the property API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::InternalError(format!("invalid api url {base_url}, {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InternalError(format!(
                "api url {base_url} cannot be a base"
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn build_http_client() -> Result<Client, AppError> {
        Ok(Client::builder().timeout(Duration::from_secs(10)).build()?)
    }

    fn property_url(&self, slug: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "properties", "slug", slug]);
        }
        url
    }
}

#[async_trait]
impl PropertySource for ApiClient {
    async fn fetch_by_slug(&self, slug: &str) -> Result<Property, AppError> {
        let url = self.property_url(slug);
        debug!("GET {url}");

        let lookup_failed = |e: reqwest::Error| {
            error!(slug, "property request failed: {e}");
            AppError::LookupFailed {
                slug: slug.to_string(),
            }
        };

        let response = self.client.get(url).send().await.map_err(lookup_failed)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::PropertyNotFound),
            status if status.is_success() => response.json::<Property>().await.map_err(lookup_failed),
            status => {
                error!(slug, "property api answered {status}");
                Err(AppError::LookupFailed {
                    slug: slug.to_string(),
                })
            }
        }
    }
}
