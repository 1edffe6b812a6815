//! Event list filtering
//!
//! Filters are a conjunction of category, date window and text search.
//! Date windows are evaluated against an injectable "today" so results
//! are deterministic under test.

use chrono::{Days, Local, Months, NaiveDate};

use crate::models::{Category, Event};

/// Date window relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No date constraint
    #[default]
    All,
    /// Exactly today
    Today,
    /// Today through seven days out, inclusive
    Week,
    /// Today through one calendar month out, inclusive
    Month,
}

impl DateFilter {
    /// Inclusive date window for this filter, or `None` when unconstrained.
    ///
    /// The month window clamps to the last day of the target month when
    /// the day of month does not exist there (Jan 31 -> Feb 28).
    pub fn window(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let end = match self {
            DateFilter::All => return None,
            DateFilter::Today => today,
            DateFilter::Week => today
                .checked_add_days(Days::new(7))
                .unwrap_or(NaiveDate::MAX),
            DateFilter::Month => today
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        };
        Some((today, end))
    }
}

/// Filter criteria applied to the event list
///
/// The default value matches every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Keep only this category, or all categories when `None`
    pub category: Option<Category>,
    /// Keep only events inside this date window
    pub date: DateFilter,
    /// Case-insensitive substring over title, description, location and
    /// category name; empty matches everything
    pub search: String,
}

impl FilterCriteria {
    /// Whether an event passes every criterion, evaluated against the
    /// given calendar day.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        self.matches_category(event)
            && self.matches_date(event, today)
            && self.matches_search(event)
    }

    fn matches_category(&self, event: &Event) -> bool {
        match self.category {
            Some(category) => event.category == category,
            None => true,
        }
    }

    /// Events whose date does not parse are excluded from every date
    /// window, but still pass when the window is unconstrained.
    fn matches_date(&self, event: &Event, today: NaiveDate) -> bool {
        let (start, end) = match self.date.window(today) {
            Some(window) => window,
            None => return true,
        };
        match event.calendar_date() {
            Some(date) => date >= start && date <= end,
            None => false,
        }
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let haystack = format!(
            "{} {} {} {}",
            event.title,
            event.description,
            event.location,
            event.category.as_str()
        )
        .to_lowercase();
        haystack.contains(&needle)
    }
}

/// Filter a list of events against today's date, preserving input order.
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    filter_events_on(events, criteria, Local::now().date_naive())
}

/// Filter with an explicit "today", preserving input order.
pub fn filter_events_on(
    events: &[Event],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| criteria.matches(event, today))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventDraft, EventOwner};

    fn make_event(title: &str, category: Category, date: &str) -> Event {
        Event::from_draft(EventDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            location: "Venue".to_string(),
            category,
            date: date.to_string(),
            time: "10:00".to_string(),
            image: None,
            video: None,
            created_by: EventOwner::Seed,
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    #[test]
    fn test_default_criteria_returns_all_in_order() {
        let events = vec![
            make_event("a", Category::Tech, "2030-06-15"),
            make_event("b", Category::Music, "1999-01-01"),
            make_event("c", Category::Arts, "not a date"),
        ];

        let filtered = filter_events_on(&events, &FilterCriteria::default(), today());
        assert_eq!(filtered, events);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let events = vec![
            make_event("close", Category::Tech, "2030-06-16"),
            make_event("far", Category::Tech, "2031-01-01"),
            make_event("other", Category::Music, "2030-06-16"),
        ];
        let criteria = FilterCriteria {
            category: Some(Category::Tech),
            date: DateFilter::Week,
            ..Default::default()
        };

        let once = filter_events_on(&events, &criteria, today());
        let twice = filter_events_on(&once, &criteria, today());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].title, "close");
    }

    #[test]
    fn test_category_filter() {
        let events = vec![
            make_event("gig", Category::Music, "2030-06-20"),
            make_event("expo", Category::Tech, "2030-06-20"),
        ];
        let criteria = FilterCriteria {
            category: Some(Category::Music),
            ..Default::default()
        };

        let filtered = filter_events_on(&events, &criteria, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "gig");
    }

    #[test]
    fn test_date_windows_are_inclusive() {
        let events = vec![
            make_event("yesterday", Category::Tech, "2030-06-14"),
            make_event("today", Category::Tech, "2030-06-15"),
            make_event("in three days", Category::Tech, "2030-06-18"),
            make_event("week boundary", Category::Tech, "2030-06-22"),
            make_event("past week", Category::Tech, "2030-06-23"),
            make_event("month boundary", Category::Tech, "2030-07-15"),
            make_event("past month", Category::Tech, "2030-07-16"),
        ];

        let titles = |date: DateFilter| -> Vec<String> {
            let criteria = FilterCriteria {
                date,
                ..Default::default()
            };
            filter_events_on(&events, &criteria, today())
                .into_iter()
                .map(|event| event.title)
                .collect()
        };

        assert_eq!(titles(DateFilter::Today), vec!["today"]);
        assert_eq!(
            titles(DateFilter::Week),
            vec!["today", "in three days", "week boundary"]
        );
        assert_eq!(
            titles(DateFilter::Month),
            vec![
                "today",
                "in three days",
                "week boundary",
                "past week",
                "month boundary"
            ]
        );
    }

    #[test]
    fn test_month_window_clamps_short_months() {
        let jan31 = NaiveDate::from_ymd_opt(2030, 1, 31).unwrap();
        let (start, end) = DateFilter::Month.window(jan31).unwrap();
        assert_eq!(start, jan31);
        assert_eq!(end, NaiveDate::from_ymd_opt(2030, 2, 28).unwrap());
    }

    #[test]
    fn test_unparsable_dates_excluded_from_date_windows() {
        let events = vec![
            make_event("dated", Category::Tech, "2030-06-15"),
            make_event("undated", Category::Tech, "TBD"),
        ];

        for date in [DateFilter::Today, DateFilter::Week, DateFilter::Month] {
            let criteria = FilterCriteria {
                date,
                ..Default::default()
            };
            let filtered = filter_events_on(&events, &criteria, today());
            assert_eq!(filtered.len(), 1, "window {date:?}");
            assert_eq!(filtered[0].title, "dated");
        }

        // Unconstrained view keeps the undated event
        let all = filter_events_on(&events, &FilterCriteria::default(), today());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut event = make_event("Tech Conference", Category::Tech, "2030-06-20");
        event.description = "Talks about cloud computing".to_string();
        event.location = "Convention Center, Downtown".to_string();
        let events = vec![event];

        let search = |term: &str| -> usize {
            let criteria = FilterCriteria {
                search: term.to_string(),
                ..Default::default()
            };
            filter_events_on(&events, &criteria, today()).len()
        };

        assert_eq!(search("CONFERENCE"), 1);
        assert_eq!(search("cloud"), 1);
        assert_eq!(search("downtown"), 1);
        assert_eq!(search("tech"), 1);
        assert_eq!(search("basketweaving"), 0);
    }

    #[test]
    fn test_criteria_combine_as_conjunction() {
        let events = vec![
            make_event("jazz night", Category::Music, "2030-06-16"),
            make_event("jazz history talk", Category::Arts, "2030-06-16"),
            make_event("jazz festival", Category::Music, "2031-01-01"),
        ];
        let criteria = FilterCriteria {
            category: Some(Category::Music),
            date: DateFilter::Week,
            search: "jazz".to_string(),
        };

        let filtered = filter_events_on(&events, &criteria, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "jazz night");
    }
}
