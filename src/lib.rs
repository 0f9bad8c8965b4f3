pub mod config;
pub mod error;
pub mod flash;
pub mod models;
pub mod report;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SurveyStore;

/// Build the application router, loading the survey index from storage.
pub async fn build_app(pool: PgPool, config: Config) -> Result<Router, sqlx::Error> {
    let store = SurveyStore::load(pool).await?;
    let state: SharedState = Arc::new(AppState { store, config });

    let app = Router::new()
        .merge(routes::app_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);

    Ok(app)
}

async fn health() -> &'static str {
    "ok"
}
