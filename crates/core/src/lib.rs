//! Eventera Core Library
//!
//! Domain model, storage, filtering and session handling for the Eventera
//! event listing app. Presentation layers sit on top of this crate.

pub mod auth;
pub mod error;
pub mod filter;
pub mod models;
pub mod storage;

pub use auth::{hash_password, verify_password, SessionGate};
pub use error::{Error, Result};
pub use filter::{filter_events, filter_events_on, DateFilter, FilterCriteria};
pub use models::*;
pub use storage::{
    seed_sample_events, seed_sample_events_on, EventRepository, EventStore, KeyValueStore,
    MemoryStore, SeedCatalog, SeedEvent, SessionRepository, SessionStore, SqliteStore, Storage,
    Store, UserRepository, UserStore,
};
