// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{account_store::AccountStore, session_store::SessionStore};
use std::sync::Arc;

/// Shared application state
///
/// Everything a request handler needs. Session state lives here, in the
/// HTTP layer, and is never reachable from the account store.
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts, backed by the user table file
    pub accounts: Arc<AccountStore>,

    /// Logged-in sessions
    pub sessions: Arc<SessionStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            accounts: Arc::new(AccountStore::new(config.storage.users_path.clone())),
            sessions: Arc::new(SessionStore::new(config.session.ttl)),
            config,
        }
    }
}
