use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ideaforge_core::config::AppConfig;
use ideaforge_llm::mistral::MistralChatClient;
use ideaforge_pipeline::Pipeline;
use ideaforge_scholar::core_api::CoreSearchClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ideaforge_server=info".into()),
        )
        .init();

    // Missing credentials are fatal for the whole process, not per-request.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal: {err}");
            std::process::exit(1);
        }
    };

    let model = Arc::new(MistralChatClient::new(&config));
    let references = Arc::new(CoreSearchClient::new(&config));
    let pipeline = Arc::new(Pipeline::new(model, references));

    let app = ideaforge_server::app_router(pipeline);

    let addr = config.addr.clone();
    tracing::info!("ideaforge server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
