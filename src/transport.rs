//! Ways of exposing [`CatalogServer`] to MCP clients. Every session shares one store.

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::server::CatalogServer;
use crate::tools::ToolRegistry;

/// Streamable HTTP endpoint mounted at `path`.
pub fn http_router(store: Arc<CatalogStore>, registry: Arc<ToolRegistry>, path: &str) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(CatalogServer::new(store.clone(), registry.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    axum::Router::new().nest_service(path, service)
}

pub async fn serve_http(
    bind_addr: &str,
    path: &str,
    store: Arc<CatalogStore>,
    registry: Arc<ToolRegistry>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Service catalog MCP server listening on: http://{}{}", bind_addr, path);
    axum::serve(listener, http_router(store, registry, path))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}

pub async fn serve_stdio(store: Arc<CatalogStore>, registry: Arc<ToolRegistry>) -> Result<()> {
    tracing::info!("Service catalog MCP server on stdio");
    let server = CatalogServer::new(store, registry)
        .serve(rmcp::transport::stdio())
        .await?;
    server.waiting().await?;
    Ok(())
}

/// Raw MCP over TCP, one session per accepted connection.
pub async fn serve_tcp(bind_addr: &str, store: Arc<CatalogStore>, registry: Arc<ToolRegistry>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Service catalog MCP server listening on: {}", bind_addr);

    loop {
        let (stream, peer_addr) = listener.accept().await?;
        tracing::info!("Accepted connection from: {}", peer_addr);

        let service = CatalogServer::new(store.clone(), registry.clone());
        tokio::spawn(async move {
            match service.serve(stream).await {
                Ok(server) => {
                    tracing::info!("Session initialized for {}", peer_addr);
                    if let Err(e) = server.waiting().await {
                        tracing::error!("Session error for {}: {:?}", peer_addr, e);
                    }
                    tracing::info!("Session closed for {}", peer_addr);
                }
                Err(e) => {
                    tracing::error!("Session setup error for {}: {:?}", peer_addr, e);
                }
            }
        });
    }
}
