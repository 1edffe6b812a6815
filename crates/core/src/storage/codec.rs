//! Stored value encoding
//!
//! Collections are persisted as whole JSON arrays under a single key, the
//! session as a single JSON record. A present but unparsable value is logged
//! and treated as empty/absent rather than surfaced as an error; a corrupt
//! store must never take the application down with it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::kv::KeyValueStore;
use crate::error::Result;

pub(crate) fn read_collection<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>> {
    let raw = match kv.get(key)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(error) => {
            warn!(key = %key, error = %error, "Stored collection unreadable, treating as empty");
            Ok(Vec::new())
        }
    }
}

pub(crate) fn write_collection<T: Serialize>(
    kv: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    kv.set(key, &raw)
}

pub(crate) fn read_record<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    let raw = match kv.get(key)? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Ok(Some(record)),
        Err(error) => {
            warn!(key = %key, error = %error, "Stored record unreadable, treating as absent");
            Ok(None)
        }
    }
}

pub(crate) fn write_record<T: Serialize>(
    kv: &dyn KeyValueStore,
    key: &str,
    record: &T,
) -> Result<()> {
    let raw = serde_json::to_string(record)?;
    kv.set(key, &raw)
}
