//! Sample event catalog and first-run seeding
//!
//! Defines the TOML-parseable catalog format for sample events. Seed dates
//! are day offsets from "today" so the samples always land in the upcoming
//! weeks instead of going stale.

use std::path::Path;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::traits::EventRepository;
use crate::error::Result;
use crate::models::{Category, Event, EventDraft, EventOwner};

/// Catalog shipped with the crate, used when no other catalog is supplied.
const DEFAULT_CATALOG: &str = include_str!("../../assets/seed_events.toml");

/// Sample event catalog loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCatalog {
    /// Sample events, in display order
    #[serde(default, rename = "event")]
    pub events: Vec<SeedEvent>,
}

/// One sample event entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    /// Days between "today" and the event date
    pub days_ahead: u32,
    /// Start time in `HH:MM` format
    pub time: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

impl SeedCatalog {
    /// Parse a catalog from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_CATALOG)
    }
}

impl SeedEvent {
    fn to_draft(&self, today: NaiveDate) -> EventDraft {
        let date = today
            .checked_add_days(Days::new(u64::from(self.days_ahead)))
            .unwrap_or(today);

        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category,
            date: date.format("%Y-%m-%d").to_string(),
            time: self.time.clone(),
            image: self.image.clone(),
            video: self.video.clone(),
            created_by: EventOwner::Seed,
        }
    }
}

/// Populate an empty repository with the built-in sample catalog.
///
/// Seeds only when the events collection is empty; a non-empty repository
/// is left untouched. Returns the resulting event sequence either way.
pub fn seed_sample_events<R>(repo: &R) -> Result<Vec<Event>>
where
    R: EventRepository + ?Sized,
{
    let catalog = SeedCatalog::builtin()?;
    seed_sample_events_on(repo, &catalog, Local::now().date_naive())
}

/// Populate an empty repository from a catalog, with an explicit "today"
/// for the relative seed dates.
#[instrument(skip(repo, catalog), fields(catalog_len = catalog.events.len()))]
pub fn seed_sample_events_on<R>(
    repo: &R,
    catalog: &SeedCatalog,
    today: NaiveDate,
) -> Result<Vec<Event>>
where
    R: EventRepository + ?Sized,
{
    let existing = repo.list_events()?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let mut added = Vec::with_capacity(catalog.events.len());
    for seed in &catalog.events {
        added.push(repo.add_event(seed.to_draft(today))?);
    }

    info!(count = added.len(), "Seeded sample events");
    Ok(added)
}
