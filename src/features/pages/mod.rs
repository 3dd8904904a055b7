pub mod auto_advance;
pub mod breakdown;
pub mod detail_view;
pub mod feature_table;
pub mod format;
pub mod gallery;
pub mod handlers;
pub mod html;
pub mod listing;
pub mod page;

use crate::utilities::app_state::AppState;

use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/satilik", get(handlers::sale_listing_handler))
        .route("/satilik/{slug}", get(handlers::sale_detail_handler))
        .route("/kiralik", get(handlers::rent_listing_handler))
        .route("/kiralik/{slug}", get(handlers::rent_detail_handler))
}
