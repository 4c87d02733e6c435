//! Session storage backends.
//!
//! `MemorySessionStore` keeps sessions in process memory and is used when no
//! Redis URL is configured. `RedisSessionStore` keeps them in Redis as JSON with
//! a TTL, so sessions survive restarts and are shared across instances.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::profile::SessionState;

const KEY_PREFIX: &str = "skillbridge:session";

/// Per-session key-value storage. Implementations isolate sessions by id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: &str) -> Result<Option<SessionState>, AppError>;
    async fn save(&self, id: &str, state: &SessionState) -> Result<(), AppError>;
    async fn remove(&self, id: &str) -> Result<(), AppError>;
    /// Restarts the expiry clock of an unchanged session.
    async fn touch(&self, id: &str) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

/// Sessions idle for longer than `ttl` are treated as absent and evicted,
/// lazily on `load` and in a sweep on every `save`.
#[derive(Debug)]
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, (SessionState, Instant)>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        MemorySessionStore {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn is_live(&self, touched: Instant, now: Instant) -> bool {
        now.duration_since(touched) < self.ttl
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: &str) -> Result<Option<SessionState>, AppError> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                Some((state, touched)) if self.is_live(*touched, now) => {
                    return Ok(Some(state.clone()))
                }
                None => return Ok(None),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if matches!(sessions.get(id), Some((_, touched)) if !self.is_live(*touched, now)) {
            sessions.remove(id);
            debug!("Expired session {id}");
        }
        Ok(None)
    }

    async fn save(&self, id: &str, state: &SessionState) -> Result<(), AppError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, (_, touched)| self.is_live(*touched, now));
        sessions.insert(id.to_string(), (state.clone(), now));
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn touch(&self, id: &str) -> Result<(), AppError> {
        let now = Instant::now();
        if let Some((_, touched)) = self.sessions.write().await.get_mut(id) {
            if self.is_live(*touched, now) {
                *touched = now;
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis backend
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisSessionStore {
    client: redis::Client,
    ttl_secs: u64,
    connection: Arc<Mutex<Option<redis::aio::MultiplexedConnection>>>,
}

impl RedisSessionStore {
    pub fn new(redis_url: &str, ttl_secs: u64) -> anyhow::Result<Self> {
        let client = redis::Client::open(redis_url)
            .with_context(|| format!("invalid redis url for session store: {redis_url}"))?;
        Ok(RedisSessionStore {
            client,
            ttl_secs,
            connection: Arc::new(Mutex::new(None)),
        })
    }

    /// Runs one command on the shared connection, opening it on first use.
    /// A failed command drops the connection so the next call reconnects.
    async fn run<T: redis::FromRedisValue>(&self, cmd: redis::Cmd) -> Result<T, AppError> {
        let mut guard = self.connection.lock().await;
        if guard.is_none() {
            *guard = Some(self.client.get_multiplexed_async_connection().await?);
        }
        let Some(conn) = guard.as_mut() else {
            return Err(AppError::Session(
                "session store connection unavailable".to_string(),
            ));
        };

        match cmd.query_async::<_, T>(conn).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Redis session command failed; dropping connection: {e}");
                *guard = None;
                Err(e.into())
            }
        }
    }
}

fn session_key(id: &str) -> String {
    format!("{KEY_PREFIX}:{id}")
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: &str) -> Result<Option<SessionState>, AppError> {
        let mut cmd = redis::cmd("GET");
        cmd.arg(session_key(id));
        let raw: Option<String> = self.run(cmd).await?;

        raw.map(|payload| {
            serde_json::from_str::<SessionState>(&payload)
                .context("failed to decode stored session")
                .map_err(AppError::Internal)
        })
        .transpose()
    }

    async fn save(&self, id: &str, state: &SessionState) -> Result<(), AppError> {
        let payload = serde_json::to_string(state).context("failed to encode session")?;
        let mut cmd = redis::cmd("SETEX");
        cmd.arg(session_key(id)).arg(self.ttl_secs).arg(payload);
        let _: () = self.run(cmd).await?;
        debug!("Saved session {id}");
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut cmd = redis::cmd("DEL");
        cmd.arg(session_key(id));
        let _: () = self.run(cmd).await?;
        Ok(())
    }

    async fn touch(&self, id: &str) -> Result<(), AppError> {
        let mut cmd = redis::cmd("EXPIRE");
        cmd.arg(session_key(id)).arg(self.ttl_secs);
        let _: () = self.run(cmd).await?;
        Ok(())
    }
}
