use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use shared::utilities::errors::AppError;
use tracing::debug;
use validator::Validate;

use crate::features::properties::{schemas::SearchParams, service::PropertyService};

pub async fn get_property_by_slug_handler(
    State(service): State<PropertyService>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let property = service.get_property_by_slug(&slug).await?;

    Ok(Json(property))
}

pub async fn search_properties_handler(
    State(service): State<PropertyService>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    debug!(
        "search: type={:?} city={:?} page={:?}",
        params.listing_type, params.city, params.page
    );

    let response = service.search(&params).await?;

    Ok(Json(response))
}
