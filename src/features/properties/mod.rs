pub mod handlers;
pub mod implementations;
pub mod models;
pub mod repository;
pub mod schemas;
pub mod service;

use crate::utilities::app_state::AppState;

use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/properties/slug/{slug}",
            get(handlers::get_property_by_slug_handler),
        )
        .route("/api/search", get(handlers::search_properties_handler))
}
