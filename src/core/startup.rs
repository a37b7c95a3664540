use anyhow::{Context, Result};
use tracing::info;

use crate::core::state::AppState;

/// Load the user table once at boot so a malformed file stops the server
/// before it accepts requests. Returns the number of registered users.
pub fn check_user_table(state: &AppState) -> Result<usize> {
    let path = state.accounts.path();

    if !path.exists() {
        info!(
            users_path = %path.display(),
            "User table not found, it will be created on the first registration"
        );
        return Ok(0);
    }

    let table = state
        .accounts
        .load()
        .context(format!("Failed to load user table from '{}'", path.display()))?;

    info!(
        users_path = %path.display(),
        users = table.len(),
        "User table loaded"
    );

    Ok(table.len())
}
