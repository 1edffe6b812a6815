//! Event storage operations

use tracing::instrument;
use uuid::Uuid;

use super::codec::{read_collection, write_collection};
use super::kv::KeyValueStore;
use super::EVENTS_KEY;
use crate::error::{Error, Result};
use crate::models::{Event, EventDraft, EventPatch};

/// Whole-collection read-modify-write over the events key.
///
/// Every mutation rewrites the full collection; the store is assumed
/// single-writer.
pub struct EventStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> EventStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    /// All events in insertion order.
    pub fn list(&self) -> Result<Vec<Event>> {
        read_collection(self.kv, EVENTS_KEY)
    }

    /// Append a new event, assigning its `id` and `created_at`.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn add(&self, draft: EventDraft) -> Result<Event> {
        let mut events = self.list()?;
        let event = Event::from_draft(draft);
        events.push(event.clone());
        write_collection(self.kv, EVENTS_KEY, &events)?;
        Ok(event)
    }

    /// Shallow-merge a patch over the stored event with the given id.
    pub fn update(&self, id: Uuid, patch: EventPatch) -> Result<Event> {
        let mut events = self.list()?;
        let event = match events.iter_mut().find(|event| event.id == id) {
            Some(event) => event,
            None => return Err(Error::EventNotFound(id)),
        };

        patch.apply(event);
        let updated = event.clone();
        write_collection(self.kv, EVENTS_KEY, &events)?;
        Ok(updated)
    }

    /// Remove the event with the given id, if present, and return the
    /// resulting collection.
    ///
    /// The collection is persisted even when nothing was removed, so a
    /// repeated delete is an idempotent no-op rather than an error. Ownership
    /// is not checked here; that is the session gate's concern.
    #[instrument(skip(self))]
    pub fn delete(&self, id: Uuid) -> Result<Vec<Event>> {
        let mut events = self.list()?;
        events.retain(|event| event.id != id);
        write_collection(self.kv, EVENTS_KEY, &events)?;
        Ok(events)
    }

    /// Find a single event by id.
    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self.list()?.into_iter().find(|event| event.id == id))
    }
}
