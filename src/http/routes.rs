use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::engine::MusicNotationEngine;
use crate::service::TransposeService;

use super::handlers;

/// Build the application router
///
/// Layers, outermost first: request id, trace, body limit, optional CORS.
pub fn router<E: MusicNotationEngine>(service: Arc<TransposeService<E>>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::welcome))
        .route("/transpose", post(handlers::transpose::<E>))
        .with_state(service);

    if config.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
