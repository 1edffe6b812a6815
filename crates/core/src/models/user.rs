//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local user account
///
/// `password_hash` holds an Argon2 PHC string (see [`crate::auth`]); plain
/// passwords never reach the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a stored record from a draft, assigning `id` and `created_at`.
    pub(crate) fn from_draft(draft: UserDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            password_hash: draft.password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Caller-supplied fields for a new account.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
