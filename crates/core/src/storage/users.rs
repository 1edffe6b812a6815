//! User account storage operations

use tracing::instrument;
use uuid::Uuid;

use super::codec::{read_collection, write_collection};
use super::kv::KeyValueStore;
use super::USERS_KEY;
use crate::error::Result;
use crate::models::{User, UserDraft};

/// Whole-collection read-modify-write over the users key.
pub struct UserStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> UserStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    /// All registered users in registration order.
    pub fn list(&self) -> Result<Vec<User>> {
        read_collection(self.kv, USERS_KEY)
    }

    /// Append a new account, assigning its `id` and `created_at`.
    ///
    /// Uniqueness of the email is not enforced here; the session gate
    /// checks for duplicates before calling this.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub fn add(&self, draft: UserDraft) -> Result<User> {
        let mut users = self.list()?;
        let user = User::from_draft(draft);
        users.push(user.clone());
        write_collection(self.kv, USERS_KEY, &users)?;
        Ok(user)
    }

    /// Find an account by exact, case-sensitive email match.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.list()?.into_iter().find(|user| user.email == email))
    }

    /// Find an account by id.
    pub fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.list()?.into_iter().find(|user| user.id == id))
    }
}
