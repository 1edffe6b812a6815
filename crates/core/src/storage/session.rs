//! Persisted session record

use tracing::instrument;

use super::codec::{read_record, write_record};
use super::kv::KeyValueStore;
use super::SESSION_KEY;
use crate::error::Result;
use crate::models::User;

/// Stores the currently logged-in user as a single record.
///
/// The stored copy is a snapshot taken at login time; callers who need
/// fresh account data should re-resolve it by id against the user store.
pub struct SessionStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> SessionStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    /// The persisted session, if any. An unreadable record is treated as
    /// no session.
    pub fn current(&self) -> Result<Option<User>> {
        read_record(self.kv, SESSION_KEY)
    }

    /// Persist or clear the session record.
    #[instrument(skip(self, user), fields(logged_in = user.is_some()))]
    pub fn set_current(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => write_record(self.kv, SESSION_KEY, user),
            None => self.kv.remove(SESSION_KEY),
        }
    }
}
