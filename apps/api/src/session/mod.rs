//! Per-session state: storage backends and the cookie that names a session.

pub mod cookie;
pub mod store;

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::SessionState;
use crate::session::store::SessionStore;

/// A session loaded at the start of a request. The handler mutates `state`
/// and hands the context back to `commit`, which persists only real changes.
#[derive(Debug)]
pub struct SessionContext {
    pub id: String,
    pub is_new: bool,
    pub state: SessionState,
    original: SessionState,
}

impl SessionContext {
    pub async fn load(
        store: &dyn SessionStore,
        headers: &HeaderMap,
        cookie_name: &str,
    ) -> Result<Self, AppError> {
        let existing = cookie::session_id_from_headers(headers, cookie_name);

        let loaded = match existing {
            Some(id) => store.load(&id).await?.map(|state| (id, state)),
            None => None,
        };

        // Unknown or expired ids are never reused; the client gets a fresh one.
        let (id, is_new, state) = match loaded {
            Some((id, state)) => (id, false, state),
            None => (Uuid::new_v4().to_string(), true, SessionState::default()),
        };

        Ok(SessionContext {
            id,
            is_new,
            original: state.clone(),
            state,
        })
    }

    pub fn changed(&self) -> bool {
        self.state != self.original
    }

    /// Writes the state back if it changed. An emptied state is removed; an
    /// unchanged existing session only has its expiry refreshed.
    pub async fn commit(&self, store: &dyn SessionStore) -> Result<(), AppError> {
        if !self.changed() {
            if !self.is_new {
                store.touch(&self.id).await?;
            }
            return Ok(());
        }
        if self.state.is_empty() {
            store.remove(&self.id).await
        } else {
            store.save(&self.id, &self.state).await
        }
    }
}
