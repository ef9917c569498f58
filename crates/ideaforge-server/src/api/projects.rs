use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use ideaforge_pipeline::Pipeline;

use crate::error::AppError;
use crate::types::{GenerateRequest, GenerateResponse};

pub fn routes(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/projects/generate", post(generate_projects))
        .with_state(pipeline)
}

async fn generate_projects(
    State(pipeline): State<Arc<Pipeline>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let projects = pipeline.run(&req.data).await?;
    Ok(Json(GenerateResponse { projects }))
}
