use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_routes = Router::new()
        .route("/static/styles.css", get(handlers::stylesheet_get))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::signup_get).post(handlers::signup_post))
        .merge(static_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
