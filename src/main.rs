use chat_relay::{config::ServerConfig, routes, state::AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    if config.provider.api_key.is_none() {
        tracing::warn!("HF_API_KEY is not set; every /chat request will fail until it is");
    }

    let state = Arc::new(AppState::hugging_face(config.provider.clone()));
    let app = routes::create_router(&config.static_dir).with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, model_url = %config.provider.model_url, "chat relay running at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
