//! Web server for authgate.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::auth::AuthService;
use crate::config::ServerConfig;
use crate::{AuthGateError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the HTTP adapter.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, auth: AuthService) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|_| {
                AuthGateError::Config(format!(
                    "invalid server address {}:{}",
                    config.host, config.port
                ))
            })?;

        let app_state = Arc::new(AppState::new(auth, &config.session_cookie));

        Ok(Self { addr, app_state })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the server until the task is cancelled.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.app_state);

        let listener = TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, router)
            .await
            .map_err(AuthGateError::Io)?;

        Ok(())
    }
}
