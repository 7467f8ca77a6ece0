// SafeSpace - HTTP server module
// Chat page and JSON endpoints backed by a shared Companion

mod handlers;
mod session;

pub use handlers::{create_router, health_check, HealthStatus};
pub use session::{
    session_cookie, session_id_from_headers, SessionManager, SessionState, SESSION_COOKIE,
};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::companion::Companion;
use crate::config::{ChatSettings, Config, ServerConfig};

/// Main server structure
pub struct CompanionServer {
    /// Reply pipeline and resource tables (shared, read-only)
    companion: Arc<Companion>,
    /// Session manager
    session_manager: Arc<SessionManager>,
    /// Server configuration
    config: ServerConfig,
    /// `/chat` behaviour
    chat: ChatSettings,
    started_at: Instant,
}

impl CompanionServer {
    /// Create a new server
    pub fn new(config: &Config, companion: Companion) -> Self {
        let session_manager = SessionManager::new(
            config.server.max_sessions,
            config.server.session_timeout_minutes,
        );

        Self {
            companion: Arc::new(companion),
            session_manager: Arc::new(session_manager),
            config: config.server.clone(),
            chat: config.chat.clone(),
            started_at: Instant::now(),
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.config.bind_address))?;

        let ai_enabled = self.companion.ai_enabled();
        let screen_chat = self.chat.screen_messages;

        // Build router
        let app = create_router(Arc::new(self)).layer(TraceLayer::new_for_http());

        tracing::info!(%addr, ai_enabled, screen_chat, "Starting SafeSpace server");

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn companion(&self) -> &Arc<Companion> {
        &self.companion
    }

    pub fn session_manager(&self) -> &Arc<SessionManager> {
        &self.session_manager
    }

    pub fn chat_settings(&self) -> &ChatSettings {
        &self.chat
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
