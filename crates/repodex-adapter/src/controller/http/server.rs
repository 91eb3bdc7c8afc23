//! Router construction and the serving loop.

use axum::middleware::from_fn;
use axum::routing::{get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use super::config::ServerConfig;
use super::handlers::{
    handle_create, handle_delete, handle_like, handle_list, handle_not_found, handle_update,
    AppState,
};
use super::middleware::{log_requests, CorsLayer};
use super::validation::validate_id;

/// Build the application router.
///
/// Every path under `/repositories/{id}` sits behind the identifier-format
/// gate, including paths with no route. CORS answers preflights before the
/// gate sees them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/repositories", get(handle_list).post(handle_create))
        .route("/repositories/{id}", put(handle_update).delete(handle_delete))
        .route("/repositories/{id}/like", post(handle_like))
        .fallback(handle_not_found)
        .method_not_allowed_fallback(handle_not_found)
        .layer(from_fn(validate_id))
        .layer(CorsLayer::new())
        .layer(from_fn(log_requests))
        .with_state(state)
}

/// Repodex HTTP server
pub struct RepositoryServer {
    state: AppState,
    config: ServerConfig,
}

impl RepositoryServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// Bind the configured address and serve until a shutdown signal arrives.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Starting Repodex server on {}", listener.local_addr()?);

        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let app = build_router(self.state);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
