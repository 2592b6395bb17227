use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower::ServiceBuilder;
use axum::extract::DefaultBodyLimit;

use crate::config::ServerConfig;
use crate::projection::Transformer;
use super::handlers::*;

pub fn create_router(config: &ServerConfig) -> Router {
    let state = AppState {
        transformer: Transformer::new(config.engine),
    };

    Router::new()
        .route("/api/utm-to-geographic", get(utm_to_geographic))
        .route("/api/geographic-to-utm", get(geographic_to_utm))
        .route("/api/distance", get(distance))
        .route("/api/centroid", post(centroid))
        .route("/api/resolve", post(resolve))
        .route("/api/footprint", post(footprint))
        .route("/api/upload", post(upload_csv))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_upload_bytes))
                .layer(CorsLayer::permissive())
        )
}
