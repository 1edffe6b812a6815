//! Key-value storage layer for Eventera

mod codec;
mod events;
mod kv;
mod seed;
mod session;
mod traits;
mod users;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Event, EventDraft, EventPatch, User, UserDraft};

pub use events::EventStore;
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use seed::{seed_sample_events, seed_sample_events_on, SeedCatalog, SeedEvent};
pub use session::SessionStore;
pub use traits::{EventRepository, SessionRepository, Storage, UserRepository};
pub use users::UserStore;

/// Key holding the JSON array of all events.
pub(crate) const EVENTS_KEY: &str = "events";
/// Key holding the JSON array of all registered accounts.
pub(crate) const USERS_KEY: &str = "users";
/// Key holding the logged-in user record, absent when logged out.
pub(crate) const SESSION_KEY: &str = "current_session";

/// Main store handle
pub struct Store {
    kv: Box<dyn KeyValueStore>,
}

impl Store {
    /// Wrap an existing key-value backend.
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Open or create a SQLite-backed store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Box::new(SqliteStore::open(path)?)))
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Box::new(SqliteStore::open_in_memory()?)))
    }

    /// Open the store at the platform data directory, creating the
    /// directory on first run.
    #[instrument]
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Platform-specific database path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "eventera", "eventera").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;
        Ok(dirs.data_dir().join("eventera.db"))
    }

    /// Get event store
    pub fn events(&self) -> EventStore<'_> {
        EventStore::new(self.kv.as_ref())
    }

    /// Get user store
    pub fn users(&self) -> UserStore<'_> {
        UserStore::new(self.kv.as_ref())
    }

    /// Get session store
    pub fn session(&self) -> SessionStore<'_> {
        SessionStore::new(self.kv.as_ref())
    }
}

// Implement repository traits for Store
// This enables using Store through the trait interface

impl EventRepository for Store {
    fn list_events(&self) -> Result<Vec<Event>> {
        self.events().list()
    }

    fn add_event(&self, draft: EventDraft) -> Result<Event> {
        self.events().add(draft)
    }

    fn update_event(&self, id: Uuid, patch: EventPatch) -> Result<Event> {
        self.events().update(id, patch)
    }

    fn delete_event(&self, id: Uuid) -> Result<Vec<Event>> {
        self.events().delete(id)
    }

    fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        self.events().find_by_id(id)
    }
}

impl UserRepository for Store {
    fn list_users(&self) -> Result<Vec<User>> {
        self.users().list()
    }

    fn add_user(&self, draft: UserDraft) -> Result<User> {
        self.users().add(draft)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.users().find_by_email(email)
    }

    fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.users().find_by_id(id)
    }
}

impl SessionRepository for Store {
    fn current_user(&self) -> Result<Option<User>> {
        self.session().current()
    }

    fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        self.session().set_current(user)
    }
}
