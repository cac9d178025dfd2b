//! Route registration.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! All routes are GET-only; static `/…/count` routes win over the
//! `/:id` parameter routes (matchit static-over-param priority), so
//! `/patients/count` is the global counter, never a patient lookup.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::db::Store;

/// Build the query API router over the given store.
pub fn api_router(store: Arc<Store>) -> Router {
    let ctx = ApiContext::new(store);

    Router::new()
        .route("/", get(endpoints::root::banner))
        .route("/patients/count", get(endpoints::patients::total))
        .route("/patients/:id", get(endpoints::patients::record))
        .route("/patients/:id/studies", get(endpoints::patients::studies))
        .route(
            "/patients/:id/studycount",
            get(endpoints::patients::study_count),
        )
        .route(
            "/patients/:id/seriescount",
            get(endpoints::patients::series_count),
        )
        .route(
            "/patients/:id/imagecount",
            get(endpoints::patients::image_count),
        )
        .route("/patients/:id/counts", get(endpoints::patients::counts))
        .route("/studies/count", get(endpoints::studies::total))
        .route("/studies/:id", get(endpoints::studies::record))
        .route("/series/count", get(endpoints::series::total))
        .route("/series/:id", get(endpoints::series::record))
        .route("/images/count", get(endpoints::images::total))
        .route("/images/:id", get(endpoints::images::record))
        .route("/imageinfo/:filename", get(endpoints::images::info))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
