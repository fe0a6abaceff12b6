//! HTTP server for the board.
//!
//! Serves the static page at `/` and the board document at `/api/board`.

mod middleware;
mod routes;

pub use middleware::{ALLOWED_HEADERS, ALLOWED_METHODS};
pub use routes::{ApiError, AppState, router};

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::Result;
use crate::config::ServerConfig;
use crate::storage::{BoardStore, FileStore};

/// Start the board server and run until Ctrl-C.
pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let store = FileStore::new(&config.data_file);
    store.init()?;

    let backend = store.backend_type();
    let state = AppState::new(Arc::new(store), &config.index_file);

    let listener = TcpListener::bind(config.addr).await?;
    let addr = listener.local_addr()?;
    println!("JSON board running: http://{}", addr);
    println!("Data file: {}", config.data_file.display());
    tracing::info!(
        %addr,
        backend,
        data_file = %config.data_file.display(),
        index_file = %config.index_file.display(),
        "server started"
    );

    serve(listener, state).await
}

/// Serve `state` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
