// HTTP surface: handler namespace and route table
pub mod handlers {
    pub use crate::handlers::*;
}

use crate::handlers::AppState;
use crate::router::ROUTES;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Builds the application router: one page route per static route, the
/// JSON API and the health check.
pub fn build_router(state: Arc<AppState>) -> Router {
    let pages = ROUTES.iter().fold(Router::new(), |router, route| {
        router.route(route.path, get(handlers::home))
    });

    let api_routes = Router::new()
        .route("/api/slots", get(handlers::available_slots))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/contact/status", get(handlers::contact_status))
        // Contact forms are small; 64KB is plenty.
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(64 * 1024)));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(pages)
        .merge(api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
