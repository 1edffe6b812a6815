//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (key-value backed, mock, future sync backend).

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Event, EventDraft, EventPatch, User, UserDraft};

/// Event repository operations
pub trait EventRepository {
    /// All persisted events in insertion order. Fails safe: a missing or
    /// unreadable collection reads as empty.
    fn list_events(&self) -> Result<Vec<Event>>;

    /// Append a new event, assigning its `id` and `created_at`.
    fn add_event(&self, draft: EventDraft) -> Result<Event>;

    /// Shallow-merge a patch over the event with the given id.
    ///
    /// Returns [`crate::Error::EventNotFound`] and leaves storage untouched
    /// when the id does not exist.
    fn update_event(&self, id: Uuid, patch: EventPatch) -> Result<Event>;

    /// Remove the event with the given id, if present, and return the
    /// resulting collection. A second delete of the same id is a no-op.
    fn delete_event(&self, id: Uuid) -> Result<Vec<Event>>;

    /// Find a single event by id.
    fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>>;
}

/// User repository operations
///
/// Email uniqueness is NOT enforced here; the session gate checks it before
/// creating an account.
pub trait UserRepository {
    /// All registered users in insertion order.
    fn list_users(&self) -> Result<Vec<User>>;

    /// Append a new user, assigning its `id` and `created_at`.
    fn add_user(&self, draft: UserDraft) -> Result<User>;

    /// Find a user by email. The match is a case-sensitive exact comparison
    /// against the stored email.
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by id.
    fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

/// Persisted current-session operations
pub trait SessionRepository {
    /// The persisted current user, if any.
    fn current_user(&self) -> Result<Option<User>>;

    /// Persist the current user snapshot; `None` removes the session key
    /// entirely.
    fn set_current_user(&self, user: Option<&User>) -> Result<()>;
}

/// Combined storage interface
///
/// Provides access to all repository operations.
pub trait Storage: EventRepository + UserRepository + SessionRepository {}

// Blanket implementation: any type implementing all traits implements Storage
impl<T> Storage for T where T: EventRepository + UserRepository + SessionRepository {}
