use crate::core::error::AccountError;
use crate::models::user::{Registration, UserRecord};
use crate::stores::user_table::UserTable;
use crate::utils::auth::constant_time_eq;
use crate::utils::digest::hash_password;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// Durable registry of accounts backed by a single delimited file
///
/// Every operation reloads the whole table from disk; a registration then
/// rewrites it in full. Reads and writes within this process share one lock,
/// so a registration cannot lose an update and a login never sees a
/// half-written file. Other processes writing the same file are not
/// coordinated with.
pub struct AccountStore {
    path: PathBuf,
    table_lock: Mutex<()>,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<UserTable, AccountError> {
        Ok(UserTable::load(&self.path)?)
    }

    pub fn save(&self, table: &UserTable) -> Result<(), AccountError> {
        Ok(table.save(&self.path)?)
    }

    fn lock_table(&self) -> MutexGuard<'_, ()> {
        self.table_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create a new account
    ///
    /// Checks run in order: missing fields, age range, password confirmation,
    /// username collision. A failed check leaves the file untouched.
    pub fn register(&self, registration: Registration) -> Result<UserRecord, AccountError> {
        let name = registration.name.trim();
        let username = registration.username.trim();

        if name.is_empty()
            || username.is_empty()
            || registration.password.is_empty()
            || registration.confirm_password.is_empty()
        {
            return Err(AccountError::missing_field());
        }

        if !(MIN_AGE..=MAX_AGE).contains(&registration.age) {
            return Err(AccountError::Validation("age out of range".to_string()));
        }

        if registration.password != registration.confirm_password {
            return Err(AccountError::password_mismatch());
        }

        let _guard = self.lock_table();

        let mut table = self.load()?;

        if table.contains_username(username) {
            debug!(username = %username, "Registration rejected, username taken");
            return Err(AccountError::username_exists());
        }

        let record = UserRecord::new(
            name.to_string(),
            registration.age,
            registration.blood_group,
            username.to_string(),
            hash_password(&registration.password),
        );

        table.push(record.clone());
        self.save(&table)?;

        info!(
            username = %record.username,
            blood_group = %record.blood_group,
            users = table.len(),
            "Account registered"
        );

        Ok(record)
    }

    /// Check a username/password pair
    ///
    /// Succeeds only when exactly one stored record matches both. Unknown
    /// usernames and wrong passwords produce the same error.
    pub fn verify(&self, username: &str, password: &str) -> Result<UserRecord, AccountError> {
        let digest = hash_password(password);
        let table = {
            let _guard = self.lock_table();
            self.load()?
        };

        let mut matches = table.records().iter().filter(|r| {
            r.username == username && constant_time_eq(&r.password_digest, &digest)
        });

        match (matches.next(), matches.next()) {
            (Some(record), None) => {
                debug!(username = %username, "Credentials verified");
                Ok(record.clone())
            }
            (Some(_), Some(_)) => {
                warn!(username = %username, "Duplicate records for username, refusing login");
                Err(AccountError::Authentication)
            }
            (None, _) => Err(AccountError::Authentication),
        }
    }
}
