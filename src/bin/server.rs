//! Mock API server: opens the storage directory and serves the management and generated routes.

use fake_api_builder::{app, AppState, FileStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fake_api_builder=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = FileStore::open(&config.apis_dir).await?;
    tracing::info!("storing apis in {}", store.dir().display());
    let state = AppState::new(store);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit)).await?;
    Ok(())
}
