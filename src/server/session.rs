// Session management for browser clients
//
// A session holds only the display name. Browsers carry the session id in a
// cookie; the manager is the sole owner of session state.

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

use crate::errors::CompanionError;

pub const SESSION_COOKIE: &str = "safespace_session";

/// Per-session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Unique session identifier
    pub id: String,
    /// Display name set through `/set-name`
    pub name: Option<String>,
    /// Last activity timestamp
    pub last_activity: DateTime<Utc>,
}

impl SessionState {
    /// Create a new session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: None,
            last_activity: Utc::now(),
        }
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Check if session has expired
    pub fn is_expired(&self, timeout_minutes: u64) -> bool {
        let now = Utc::now();
        let elapsed = now.signed_duration_since(self.last_activity);
        elapsed.num_minutes() >= i64::try_from(timeout_minutes).unwrap_or(i64::MAX)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Concurrent session manager using DashMap
pub struct SessionManager {
    /// Active sessions (thread-safe concurrent HashMap)
    sessions: Arc<DashMap<String, SessionState>>,
    /// Maximum number of concurrent sessions
    max_sessions: usize,
    /// Session timeout in minutes
    timeout_minutes: u64,
}

impl SessionManager {
    /// Create a new session manager.
    ///
    /// Expired sessions are swept every minute when a Tokio runtime is
    /// available.
    pub fn new(max_sessions: usize, timeout_minutes: u64) -> Self {
        let manager = Self {
            sessions: Arc::new(DashMap::new()),
            max_sessions,
            timeout_minutes,
        };

        if tokio::runtime::Handle::try_current().is_ok() {
            manager.start_cleanup_task();
        }

        manager
    }

    /// Look up a live session without creating one
    pub fn get(&self, session_id: &str) -> Option<SessionState> {
        let mut session = self.sessions.get_mut(session_id)?;
        if session.is_expired(self.timeout_minutes) {
            drop(session);
            self.sessions.remove(session_id);
            return None;
        }
        session.touch();
        Some(session.clone())
    }

    /// Display name stored for a session, if any
    pub fn name_for(&self, session_id: &str) -> Option<String> {
        self.get(session_id).and_then(|s| s.name)
    }

    /// Get or create a session
    pub fn get_or_create(&self, session_id: Option<&str>) -> Result<SessionState, CompanionError> {
        if let Some(session) = session_id.and_then(|id| self.get(id)) {
            return Ok(session);
        }

        // Check session limit
        if self.sessions.len() >= self.max_sessions {
            return Err(CompanionError::SessionLimit {
                active: self.sessions.len(),
                max: self.max_sessions,
            });
        }

        let session = SessionState::new();
        self.sessions.insert(session.id.clone(), session.clone());

        tracing::info!(session_id = %session.id, "Created new session");
        Ok(session)
    }

    /// Store the display name, creating the session on first use
    pub fn set_name(&self, session_id: Option<&str>, name: &str) -> Result<SessionState, CompanionError> {
        let mut session = self.get_or_create(session_id)?;
        session.name = Some(name.trim().to_string());
        session.touch();
        self.sessions.insert(session.id.clone(), session.clone());

        tracing::debug!(session_id = %session.id, "Stored session name");
        Ok(session)
    }

    /// Get active session count
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove expired sessions now
    pub fn cleanup_expired(&self) -> usize {
        remove_expired(&self.sessions, self.timeout_minutes)
    }

    /// Start background cleanup task
    fn start_cleanup_task(&self) {
        let sessions = Arc::clone(&self.sessions);
        let timeout_minutes = self.timeout_minutes;

        tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(60)); // Check every minute

            loop {
                interval.tick().await;
                remove_expired(&sessions, timeout_minutes);
            }
        });
    }
}

fn remove_expired(sessions: &DashMap<String, SessionState>, timeout_minutes: u64) -> usize {
    let expired_sessions: Vec<String> = sessions
        .iter()
        .filter(|entry| entry.value().is_expired(timeout_minutes))
        .map(|entry| entry.key().clone())
        .collect();

    let mut removed_count = 0;
    for session_id in expired_sessions {
        if sessions.remove(&session_id).is_some() {
            removed_count += 1;
            tracing::debug!(session_id = %session_id, "Removed expired session");
        }
    }

    if removed_count > 0 {
        tracing::info!(
            removed = removed_count,
            active = sessions.len(),
            "Cleaned up expired sessions"
        );
    }

    removed_count
}

/// Extract the session id from the request's Cookie headers
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Set-Cookie value binding the browser to a session
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id)
}
