use crate::models::user::UserRecord;
use crate::utils::time::is_expired;
use dashmap::DashMap;
use std::sync::Arc;

/// A logged-in user, identified by an opaque token
#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub name: String,
    pub created_at: i64,
}

/// In-memory session table owned by the HTTP layer
///
/// Sessions do not survive a restart.
pub struct SessionStore {
    sessions: DashMap<String, Arc<Session>>,
    ttl: i64,
}

impl SessionStore {
    pub fn new(ttl: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Open a session for `user` and return it
    pub fn create(&self, user: &UserRecord, current_time: i64) -> Arc<Session> {
        let token = hex::encode(rand::random::<[u8; 16]>());

        let session = Arc::new(Session {
            token: token.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            created_at: current_time,
        });

        self.sessions.insert(token, Arc::clone(&session));
        session
    }

    /// Look up a live session. Expired sessions are dropped on access.
    pub fn get(&self, token: &str, current_time: i64) -> Option<Arc<Session>> {
        let session = self.sessions.get(token).map(|entry| Arc::clone(entry.value()))?;

        if is_expired(session.created_at, self.ttl, current_time) {
            self.sessions.remove(token);
            return None;
        }

        Some(session)
    }

    /// Close a session. Returns whether it existed.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop every expired session and return how many were removed
    pub fn cleanup_expired(&self, current_time: i64) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !is_expired(session.created_at, self.ttl, current_time));
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
