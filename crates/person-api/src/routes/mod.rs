use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Person endpoints
        .route(
            "/persons",
            get(handlers::person::list_persons).post(handlers::person::create_person),
        )
        .route("/persons/:id", get(handlers::person::get_person))
        .route("/persons/color/:color", get(handlers::person::list_persons_by_color))

        // Add state
        .with_state(state)

        // Add CORS and request tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
