use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use inkprobe::api::{router, AppState};
use inkprobe::config::AppConfig;
use inkprobe::services::article::ArticleFetcher;
use inkprobe::services::embedding::RemoteEmbeddingClient;
use inkprobe::services::pipeline::AnalysisPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    inkprobe::init_logging();
    info!("=== Inkprobe Started ===");

    let config = AppConfig::load();
    info!(
        embedding_url = %config.embedding.base_url,
        embedding_model = %config.embedding.model,
        "config.loaded"
    );

    let provider = Arc::new(RemoteEmbeddingClient::new(&config.embedding));
    let pipeline = Arc::new(AnalysisPipeline::new(provider));
    let fetcher = Arc::new(ArticleFetcher::new());

    let app = router(AppState { pipeline, fetcher });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Application is running on: http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;

    info!("=== Inkprobe Exited ===");
    Ok(())
}
