//! Event RSVP tracking and the upcoming/past split.
//!
//! The split is a function of an explicit evaluation instant and is never
//! stored: an event moves from upcoming to past simply by rendering with a
//! later instant. Toggling an RSVP never touches `registered_count`.

use std::collections::BTreeSet;

use campus_config::EventsConfig;
use campus_core::entities::EventRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::empty::{EmptyState, RecoveryAction};
use crate::error::ViewError;

/// Ids of events the session is registered for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationSet(BTreeSet<String>);

impl RegistrationSet {
    /// Seed from the events whose default registration flag is set.
    #[must_use]
    pub fn seeded(events: &[EventRecord]) -> Self {
        Self(
            events
                .iter()
                .filter(|event| event.is_registered)
                .map(|event| event.id.clone())
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// A copy with `id` added if absent or removed if present.
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        Self(next)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Events split around an evaluation instant. Together the halves hold every
/// event exactly once, each in fixture order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPartition<'a> {
    pub upcoming: Vec<&'a EventRecord>,
    pub past: Vec<&'a EventRecord>,
}

/// An event is upcoming iff its instant is strictly after `now`.
#[must_use]
pub fn partition_events(events: &[EventRecord], now: DateTime<Utc>) -> EventPartition<'_> {
    let (upcoming, past): (Vec<_>, Vec<_>) = events.iter().partition(|event| event.instant() > now);
    EventPartition { upcoming, past }
}

/// Which half of the split the page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTab {
    #[default]
    Upcoming,
    Past,
}

impl EventTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    const fn other(self) -> Self {
        match self {
            Self::Upcoming => Self::Past,
            Self::Past => Self::Upcoming,
        }
    }
}

/// Result of a successful RSVP toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpOutcome {
    Registered,
    Cancelled,
}

/// One event as the events page shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard<'a> {
    pub event: &'a EventRecord,
    /// Long form, e.g. `Sunday, June 15, 2025`.
    pub formatted_date: String,
    pub fill_percent: f64,
    pub online: bool,
    /// Membership in this session's registration set.
    pub registered: bool,
    pub can_rsvp: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsPage<'a> {
    pub tab: EventTab,
    pub upcoming_count: usize,
    pub past_count: usize,
    pub events: Vec<EventCard<'a>>,
    pub empty_state: Option<EmptyState>,
}

/// Long date as shown on event cards.
#[must_use]
pub fn format_event_date(event: &EventRecord) -> String {
    event.date.format("%A, %B %-d, %Y").to_string()
}

/// Events page controller. Owns this session's registration set.
#[derive(Debug, Clone)]
pub struct EventsView<'a> {
    events: &'a [EventRecord],
    registrations: RegistrationSet,
    enforce_capacity: bool,
}

impl<'a> EventsView<'a> {
    #[must_use]
    pub fn new(events: &'a [EventRecord], config: &EventsConfig) -> Self {
        Self {
            events,
            registrations: RegistrationSet::seeded(events),
            enforce_capacity: config.enforce_capacity,
        }
    }

    #[must_use]
    pub const fn registrations(&self) -> &RegistrationSet {
        &self.registrations
    }

    /// Register for or cancel registration to `id`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::NotFound`] for an unknown id.
    /// - [`ViewError::EventClosed`] if the event is not upcoming at `now`.
    /// - [`ViewError::EventFull`] when registering for a full event with
    ///   capacity enforcement on. Cancelling is always allowed.
    pub fn toggle_rsvp(&mut self, id: &str, now: DateTime<Utc>) -> Result<RsvpOutcome, ViewError> {
        let event = self
            .events
            .iter()
            .find(|event| event.id == id)
            .ok_or_else(|| ViewError::NotFound {
                entity_type: "event",
                id: id.to_string(),
            })?;

        if event.instant() <= now {
            tracing::warn!(event_id = id, "rsvp rejected: event already past");
            return Err(ViewError::EventClosed { id: id.to_string() });
        }

        let registering = !self.registrations.contains(id);
        if registering && self.enforce_capacity && event.is_full() {
            tracing::warn!(event_id = id, "rsvp rejected: event at capacity");
            return Err(ViewError::EventFull { id: id.to_string() });
        }

        self.registrations = self.registrations.toggled(id);
        let outcome = if registering {
            RsvpOutcome::Registered
        } else {
            RsvpOutcome::Cancelled
        };
        tracing::debug!(event_id = id, ?outcome, "rsvp toggled");
        Ok(outcome)
    }

    #[must_use]
    pub fn render(&self, tab: EventTab, now: DateTime<Utc>) -> EventsPage<'a> {
        let partition = partition_events(self.events, now);
        let upcoming_count = partition.upcoming.len();
        let past_count = partition.past.len();
        tracing::debug!(upcoming_count, past_count, "events partitioned");

        let selected = match tab {
            EventTab::Upcoming => partition.upcoming,
            EventTab::Past => partition.past,
        };

        let events: Vec<EventCard<'a>> = selected
            .into_iter()
            .map(|event| EventCard {
                event,
                formatted_date: format_event_date(event),
                fill_percent: event.fill_percent(),
                online: event.is_online(),
                registered: self.registrations.contains(&event.id),
                can_rsvp: tab == EventTab::Upcoming,
            })
            .collect();

        let empty_state = events.is_empty().then(|| {
            let message = match tab {
                EventTab::Upcoming => "Check back soon for new events!",
                EventTab::Past => "No past events to show.",
            };
            EmptyState::new(
                &format!("No {} events", tab.as_str()),
                message,
                RecoveryAction::SwitchTab {
                    tab: tab.other().as_str().to_string(),
                },
            )
        });

        EventsPage {
            tab,
            upcoming_count,
            past_count,
            events,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::EventMode;
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn event(id: &str, date: (i32, u32, u32), registered_count: u32, seeded: bool) -> EventRecord {
        EventRecord {
            id: id.into(),
            title: format!("Event {id}"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
            time: "18:00".into(),
            location: "Campus".into(),
            mode: EventMode::Offline,
            description: String::new(),
            registered_count,
            max_capacity: 100,
            is_registered: seeded,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid instant")
    }

    #[test]
    fn toggle_is_an_involution() {
        let set = RegistrationSet::seeded(&[event("1", (2030, 1, 1), 0, true)]);
        let once = set.toggled("2");
        assert!(once.contains("2"));
        assert_eq!(once.toggled("2"), set);
        assert_eq!(set.toggled("1").toggled("1"), set);
    }

    #[test]
    fn toggled_leaves_receiver_untouched() {
        let set = RegistrationSet::default();
        let next = set.toggled("1");
        assert!(set.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn event_on_evaluation_day_is_past_after_midnight() {
        let events = vec![event("1", (2025, 6, 15), 0, false)];
        let before = partition_events(&events, at(2025, 6, 14, 23));
        assert_eq!(before.upcoming.len(), 1);

        let same_day = partition_events(&events, at(2025, 6, 15, 9));
        assert!(same_day.upcoming.is_empty());
        assert_eq!(same_day.past.len(), 1);
    }

    #[test]
    fn exact_instant_counts_as_past() {
        let events = vec![event("1", (2025, 6, 15), 0, false)];
        let partition = partition_events(&events, at(2025, 6, 15, 0));
        assert_eq!(partition.past.len(), 1);
    }

    #[test]
    fn full_event_rejects_registration_but_allows_cancel() {
        let events = vec![
            event("1", (2030, 1, 1), 100, false),
            event("2", (2030, 1, 1), 100, true),
        ];
        let mut view = EventsView::new(&events, &EventsConfig::default());
        let now = at(2025, 1, 1, 0);

        assert!(matches!(view.toggle_rsvp("1", now), Err(ViewError::EventFull { .. })));
        assert_eq!(view.toggle_rsvp("2", now).expect("cancel"), RsvpOutcome::Cancelled);
    }

    #[test]
    fn capacity_is_ignored_when_not_enforced() {
        let events = vec![event("1", (2030, 1, 1), 100, false)];
        let config = EventsConfig {
            enforce_capacity: false,
        };
        let mut view = EventsView::new(&events, &config);
        let outcome = view.toggle_rsvp("1", at(2025, 1, 1, 0)).expect("register");
        assert_eq!(outcome, RsvpOutcome::Registered);
        assert_eq!(events[0].registered_count, 100);
    }

    #[test]
    fn past_and_unknown_events_are_rejected() {
        let events = vec![event("1", (2020, 1, 1), 0, false)];
        let mut view = EventsView::new(&events, &EventsConfig::default());
        let now = at(2025, 1, 1, 0);
        assert!(matches!(view.toggle_rsvp("1", now), Err(ViewError::EventClosed { .. })));
        assert!(matches!(view.toggle_rsvp("9", now), Err(ViewError::NotFound { .. })));
        assert!(view.registrations().is_empty());
    }

    #[test]
    fn render_formats_dates_and_marks_registrations() {
        let events = vec![event("1", (2025, 6, 15), 25, true)];
        let view = EventsView::new(&events, &EventsConfig::default());
        let page = view.render(EventTab::Upcoming, at(2025, 1, 1, 0));

        assert_eq!(page.upcoming_count, 1);
        let card = &page.events[0];
        assert_eq!(card.formatted_date, "Sunday, June 15, 2025");
        assert!(card.registered);
        assert!(card.can_rsvp);
        assert!(!card.online);
        assert!((card.fill_percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tab_points_at_the_other_tab() {
        let events = vec![event("1", (2020, 1, 1), 0, false)];
        let view = EventsView::new(&events, &EventsConfig::default());
        let page = view.render(EventTab::Upcoming, at(2025, 1, 1, 0));

        let empty = page.empty_state.expect("empty state");
        assert_eq!(empty.title, "No upcoming events");
        assert_eq!(
            empty.action,
            RecoveryAction::SwitchTab {
                tab: "past".into()
            }
        );
    }
}
