//! Event model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Placeholder shown for events created without an image URL.
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?w=400";

/// Who created an event.
///
/// Seeded sample events have no owning account; nobody is authorized to
/// modify them through the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOwner {
    /// Catalog-seeded sample data
    Seed,
    /// A registered user
    User(Uuid),
}

impl EventOwner {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            EventOwner::Seed => None,
            EventOwner::User(id) => Some(*id),
        }
    }
}

/// A listed event
///
/// `date` and `time` are kept as entered by the caller (nominally
/// `YYYY-MM-DD` and `HH:MM`); the core does not validate field formats.
/// Typed access goes through [`Event::calendar_date`] and
/// [`Event::start_time`], and the filter engine excludes events whose date
/// does not parse from any date-restricted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub date: String,
    pub time: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub created_by: EventOwner,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Build a stored record from a draft, assigning `id` and `created_at`.
    ///
    /// Empty-string media fields are normalized to `None` here so the rest of
    /// the crate never sees the sentinel values HTML forms produce.
    pub(crate) fn from_draft(draft: EventDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            category: draft.category,
            date: draft.date,
            time: draft.time,
            image: normalize(draft.image),
            video: normalize(draft.video),
            created_by: draft.created_by,
            created_at: Utc::now(),
        }
    }

    /// The event's calendar date, if it parses.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The event's start time, if it parses (`HH:MM` or `HH:MM:SS`).
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&self.time, "%H:%M"))
            .ok()
    }

    /// Long-form date for display, e.g. "December 15, 2023".
    ///
    /// Falls back to the raw stored string when the date does not parse.
    pub fn format_date(&self) -> String {
        match self.calendar_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// Twelve-hour clock time for display, e.g. "09:00 AM".
    pub fn format_time(&self) -> String {
        match self.start_time() {
            Some(time) => time.format("%I:%M %p").to_string(),
            None => self.time.clone(),
        }
    }

    /// Combined display form: "December 15, 2023 at 09:00 AM".
    pub fn format_date_time(&self) -> String {
        format!("{} at {}", self.format_date(), self.format_time())
    }

    /// Image URL, or the stock placeholder when none was provided.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_EVENT_IMAGE)
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.created_by == EventOwner::User(user_id)
    }
}

/// Caller-supplied fields for a new event.
///
/// There is deliberately no `id` or `created_at` here: the repository assigns
/// both, so caller-supplied values cannot leak into storage.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub date: String,
    pub time: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub created_by: EventOwner,
}

/// Partial update for an event; `None` fields are left untouched.
///
/// Media fields are doubly optional: `Some(None)` clears the field,
/// `Some(Some(url))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image: Option<Option<String>>,
    pub video: Option<Option<String>>,
}

impl EventPatch {
    /// Shallow-merge this patch over `event`; patch fields win.
    pub(crate) fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(image) = self.image {
            event.image = normalize(image);
        }
        if let Some(video) = self.video {
            event.video = normalize(video);
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> EventDraft {
        EventDraft {
            title: "Tech Conference".to_string(),
            description: "Annual technology conference".to_string(),
            location: "Convention Center".to_string(),
            category: Category::Tech,
            date: "2023-12-15".to_string(),
            time: "09:00".to_string(),
            image: None,
            video: None,
            created_by: EventOwner::Seed,
        }
    }

    #[test]
    fn test_from_draft_assigns_generated_fields() {
        let event = Event::from_draft(make_draft());
        assert_ne!(event.id, Uuid::nil());
        assert!(event.created_at <= Utc::now());
    }

    #[test]
    fn test_from_draft_normalizes_empty_media() {
        let mut draft = make_draft();
        draft.image = Some(String::new());
        draft.video = Some("https://example.com/v.mp4".to_string());

        let event = Event::from_draft(draft);
        assert_eq!(event.image, None);
        assert_eq!(event.image_or_placeholder(), DEFAULT_EVENT_IMAGE);
        assert!(event.has_video());
    }

    #[test]
    fn test_format_date_and_time() {
        let event = Event::from_draft(make_draft());
        assert_eq!(event.format_date(), "December 15, 2023");
        assert_eq!(event.format_time(), "09:00 AM");
        assert_eq!(event.format_date_time(), "December 15, 2023 at 09:00 AM");
    }

    #[test]
    fn test_format_falls_back_to_raw_strings() {
        let mut draft = make_draft();
        draft.date = "someday".to_string();
        draft.time = "late".to_string();

        let event = Event::from_draft(draft);
        assert_eq!(event.calendar_date(), None);
        assert_eq!(event.format_date(), "someday");
        assert_eq!(event.format_time(), "late");
    }

    #[test]
    fn test_start_time_accepts_seconds() {
        let mut draft = make_draft();
        draft.time = "18:30:00".to_string();
        let event = Event::from_draft(draft);
        assert_eq!(event.format_time(), "06:30 PM");
    }

    #[test]
    fn test_ownership() {
        let user_id = Uuid::new_v4();
        let mut draft = make_draft();
        draft.created_by = EventOwner::User(user_id);

        let event = Event::from_draft(draft);
        assert!(event.is_owned_by(user_id));
        assert!(!event.is_owned_by(Uuid::new_v4()));

        let seeded = Event::from_draft(make_draft());
        assert!(!seeded.is_owned_by(user_id));
        assert_eq!(seeded.created_by.user_id(), None);
    }

    #[test]
    fn test_patch_apply() {
        let mut event = Event::from_draft(make_draft());
        let original_id = event.id;

        let patch = EventPatch {
            title: Some("Updated".to_string()),
            image: Some(Some("https://example.com/i.png".to_string())),
            ..Default::default()
        };
        patch.apply(&mut event);

        assert_eq!(event.id, original_id);
        assert_eq!(event.title, "Updated");
        assert_eq!(event.image.as_deref(), Some("https://example.com/i.png"));
        // Untouched fields survive
        assert_eq!(event.location, "Convention Center");

        let clear = EventPatch {
            image: Some(None),
            ..Default::default()
        };
        clear.apply(&mut event);
        assert_eq!(event.image, None);
    }
}
