use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{DateTime, Utc};
use companion::{InterfaceMode, VoiceSession};
use dashmap::DashMap;
use uuid::Uuid;

use crate::{config::ServerConfig, error::ApiError};

/// Shared application state handed to every handler through axum `State`
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionStore::new(config.max_sessions, config.default_seed);
        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// In-memory voice sessions keyed by id
pub struct SessionStore {
    sessions: DashMap<Uuid, VoiceSession>,
    /// Slots taken, reserved before insert so concurrent creates respect the cap
    open: AtomicUsize,
    max_sessions: usize,
    default_seed: Option<u64>,
}

impl SessionStore {
    pub fn new(max_sessions: usize, default_seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            open: AtomicUsize::new(0),
            max_sessions,
            default_seed,
        }
    }

    /// Open a session. Without an explicit seed the configured default is used,
    /// falling back to entropy.
    pub fn create(
        &self,
        mode: InterfaceMode,
        seed: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<Uuid, ApiError> {
        let reserved = self
            .open
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |open| {
                (open < self.max_sessions).then_some(open + 1)
            });
        if reserved.is_err() {
            tracing::warn!(max = self.max_sessions, "Session limit reached");
            return Err(ApiError::Unavailable("Too many active sessions".to_string()));
        }

        let seed = seed
            .or(self.default_seed)
            .unwrap_or_else(rand::random::<u64>);
        let id = Uuid::new_v4();
        self.sessions.insert(id, VoiceSession::new(mode, seed, now));

        tracing::info!(session_id = %id, ?mode, "Session created");
        Ok(id)
    }

    /// Run `f` with exclusive access to one session
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut VoiceSession) -> T,
    ) -> Result<T, ApiError> {
        let mut session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;
        Ok(f(session.value_mut()))
    }

    pub fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.sessions
            .remove(&id)
            .map(|_| {
                self.open.fetch_sub(1, Ordering::AcqRel);
                tracing::info!(session_id = %id, "Session closed");
            })
            .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
