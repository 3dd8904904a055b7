use std::sync::Arc;

use shared::{
    schemas::{Pagination, PaginationMeta},
    utilities::errors::AppError,
};
use tracing::{debug, error, warn};

use crate::features::properties::{
    repository::PropertyStore,
    schemas::{Facets, Property, SearchParams, SearchResponse},
};

#[derive(Clone)]
pub struct PropertyService {
    store: Arc<dyn PropertyStore>,
    default_page_size: i64,
}

impl PropertyService {
    pub fn new(store: Arc<dyn PropertyStore>, default_page_size: i64) -> Self {
        Self {
            store,
            default_page_size,
        }
    }

    /// Looks up one listing by its exact slug and schedules a view-count
    /// increment for it. The increment never affects the returned result.
    pub async fn get_property_by_slug(&self, slug: &str) -> Result<Property, AppError> {
        let record = match self.store.find_by_slug(slug).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("no property matches slug {slug}");
                return Err(AppError::PropertyNotFound);
            }
            Err(e) => {
                error!(slug, "property lookup failed: {e}");
                return Err(AppError::LookupFailed {
                    slug: slug.to_string(),
                });
            }
        };

        let id = record.id;
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.increment_view_count(id).await {
                warn!(property_id = id, "view count increment failed: {e}");
            }
        });

        Ok(Property::from(record))
    }

    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, AppError> {
        let pagination = Pagination {
            page: params.page.unwrap_or(1),
            limit: params.limit,
        };
        pagination.validate()?;
        let limit = pagination.limit_or(self.default_page_size);
        let offset = pagination.offset(limit)?;

        let result = self
            .store
            .search(params, offset, limit)
            .await
            .map_err(|e| {
                error!("property search failed: {e}");
                AppError::SearchFailed
            })?;

        let properties: Vec<Property> = result.records.into_iter().map(Property::from).collect();
        let facets = Facets::collect(&properties, params.city.as_deref());

        Ok(SearchResponse {
            properties,
            pagination: PaginationMeta::new(pagination.page, limit, result.total),
            facets,
        })
    }
}
