//! Server Implementation
//!
//! HTTP 服务器启动和管理

use tokio::net::TcpListener;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = format!("{}:{}", self.config.http_host, self.config.http_port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Config(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!(
            "🔧 Service desk server listening on http://{}",
            listener.local_addr()?
        );

        let app = api::build_app(&state).with_state(state);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
