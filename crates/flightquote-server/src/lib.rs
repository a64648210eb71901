//! flightquote-server
//!
//! HTTP front end: renders posted quotations to PDF, serves the booking
//! form's lookup lists and the static public directory.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Anything not routed below is looked up in the public directory.
    let public = ServeDir::new(state.assets.root());

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/airports", get(routes::reference::list_airports))
        .route("/corp-names", get(routes::reference::list_corp_names))
        .route("/generate-pdf", post(routes::quotation::generate_pdf))
        .fallback_service(public)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
