use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use marquee_api::{
    config::Config,
    routes::create_router,
    services::providers::{CatalogProvider, TmdbProvider},
    state::AppState,
    watchstate::{FileStorage, WatchStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let storage = FileStorage::new(&config.data_dir)?;
    let store = Arc::new(WatchStore::new(Arc::new(storage)));

    let provider: Arc<dyn CatalogProvider> = Arc::new(TmdbProvider::new(
        config.tmdb_token.clone(),
        config.tmdb_api_url.clone(),
    ));
    tracing::info!(provider = provider.name(), data_dir = %config.data_dir, "Initialized");

    let state = AppState::new(provider, store);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
