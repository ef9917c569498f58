pub mod projects;

use std::sync::Arc;

use axum::{Router, routing::get};

use ideaforge_pipeline::Pipeline;

pub fn api_routes(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", projects::routes(pipeline))
}
