pub mod features;
pub mod services;
pub mod utilities;

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use shared::{
    services::database::Database,
    utilities::{config::Config, errors::AppError},
};
use tokio::{
    net::TcpListener,
    signal::{
        self,
        unix::{SignalKind, signal},
    },
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    features::properties::{repository::PgPropertyStore, service::PropertyService},
    utilities::app_state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn health_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub fn build_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let cors = match HeaderValue::from_str(&state.config.frontend_endpoint) {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(e) => {
            warn!("invalid FRONTEND_ENDPOINT, cors origin left unset: {e}");
            CorsLayer::new()
        }
    }
    .allow_methods([Method::GET, Method::OPTIONS])
    .allow_headers([CONTENT_TYPE])
    .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .merge(features::properties::routes())
        .merge(features::pages::routes())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), AppError> {
    let database = Database::new(&config).await?;
    let store = Arc::new(PgPropertyStore::new(database.pool.clone()));
    let property_service = PropertyService::new(store, config.search_page_size);

    let state = AppState::new(config.clone(), property_service)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&config.server_address).await?;
    info!("🚀 Server running on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.pool.close().await;
    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
