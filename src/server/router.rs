use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::features::health::handle_healthcheck;
use crate::features::itinerary::handle_generate_itinerary;
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_healthcheck))
        .route("/api/generate-itinerary", post(handle_generate_itinerary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
