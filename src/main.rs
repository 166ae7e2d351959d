use anyhow::Result;
use service_catalog_mcp::{
    CatalogStore, FileSource, ToolRegistry,
    config::{AppConfig, Transport},
    logging, transport,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.log_level)?;
    match &config.loaded_from {
        Some(path) => tracing::info!("configuration loaded from {}", path.display()),
        None => tracing::warn!("no configuration file found, using defaults"),
    }

    let source = FileSource::discover(&config.data_file);
    tracing::info!(candidates = ?source.candidates(), "services dataset will be loaded on first request");
    let store = Arc::new(CatalogStore::new(source));
    let registry = Arc::new(ToolRegistry::new());

    match config.transport {
        Transport::Http => transport::serve_http(&config.bind_addr, &config.http_path, store, registry).await,
        Transport::Stdio => transport::serve_stdio(store, registry).await,
        Transport::Tcp => transport::serve_tcp(&config.bind_addr, store, registry).await,
    }
}
