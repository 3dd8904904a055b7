use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use shared::utilities::{config::Config, errors::AppError};
use tracing::debug;
use validator::Validate;

use crate::features::{
    pages::{
        detail_view::{DetailView, PropertySource, ViewError, ViewState},
        gallery::Gallery,
        html::{render_detail_page, render_error_page, render_loading_page},
        listing::render_listing_page,
        page::Page,
    },
    properties::{
        schemas::{ListingType, SearchParams},
        service::PropertyService,
    },
};

pub async fn sale_detail_handler(
    State(source): State<Arc<dyn PropertySource>>,
    State(config): State<Config>,
    Path(slug): Path<String>,
) -> Response {
    render_detail(source.as_ref(), &config, ListingType::Sale, &slug).await
}

pub async fn rent_detail_handler(
    State(source): State<Arc<dyn PropertySource>>,
    State(config): State<Config>,
    Path(slug): Path<String>,
) -> Response {
    render_detail(source.as_ref(), &config, ListingType::Rent, &slug).await
}

pub async fn sale_listing_handler(
    State(service): State<PropertyService>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<Html<String>, AppError> {
    render_listing(&service, ListingType::Sale, params).await
}

pub async fn rent_listing_handler(
    State(service): State<PropertyService>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<Html<String>, AppError> {
    render_listing(&service, ListingType::Rent, params).await
}

async fn render_detail(
    source: &dyn PropertySource,
    config: &Config,
    listing_type: ListingType,
    slug: &str,
) -> Response {
    let mut view = DetailView::new();

    match view.load(source, slug).await {
        ViewState::Loaded(property) => {
            let gallery = Gallery::new(Page::new(), property.images.clone());
            let page_url = format!(
                "{}/{}/{}",
                config.frontend_endpoint.trim_end_matches('/'),
                listing_type.path_segment(),
                property.slug
            );

            Html(render_detail_page(
                property,
                listing_type,
                &gallery,
                config.gallery_auto_advance,
                &page_url,
            ))
            .into_response()
        }
        ViewState::Errored(error) => {
            let status = match error {
                ViewError::NotFound => StatusCode::NOT_FOUND,
                ViewError::Failed => StatusCode::INTERNAL_SERVER_ERROR,
            };

            (status, Html(render_error_page(*error, listing_type))).into_response()
        }
        ViewState::Loading => Html(render_loading_page()).into_response(),
    }
}

async fn render_listing(
    service: &PropertyService,
    listing_type: ListingType,
    mut params: SearchParams,
) -> Result<Html<String>, AppError> {
    params.listing_type = Some(listing_type);
    params.validate()?;

    debug!("{} listing page {:?}", listing_type, params.page);

    let response = service.search(&params).await?;

    Ok(Html(render_listing_page(listing_type, &params, &response)))
}
