pub mod api;
pub mod error;
pub mod types;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use ideaforge_pipeline::Pipeline;

pub fn app_router(pipeline: Arc<Pipeline>) -> Router {
    // Permissive CORS; the layer also answers OPTIONS preflight requests.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::api_routes(pipeline).layer(cors)
}
