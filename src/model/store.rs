use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::event::{Event, EventId};

/// Ordered list of events backing the timeline.
///
/// A pure data container: it never validates ranges and never reorders.
/// Connector routing and row layout both lean on the insertion order, so
/// `update` swaps times in place and leaves everything else alone. Durable
/// persistence is the host's job; the store just carries serde-ready data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replace an event's start and end in place. All other fields and the
    /// event's position in the list are left untouched. Unknown ids are
    /// ignored.
    pub fn update(&mut self, id: EventId, start: NaiveDateTime, end: NaiveDateTime) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.start = start;
            event.end = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn store() -> EventStore {
        EventStore::new(vec![
            Event::new(1, "The most important event", at(12, 10), at(16, 15)),
            Event::new(2, "Second event", at(10, 18), at(13, 0)),
            Event::new(3, "Do some programming", at(16, 6), at(17, 22)),
        ])
    }

    #[test]
    fn test_get_finds_event_by_id() {
        let store = store();
        assert_eq!(store.get(2).map(|e| e.name.as_str()), Some("Second event"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_update_replaces_times_only() {
        let mut store = store();
        store.update(1, at(13, 10), at(17, 15));

        let event = store.get(1).unwrap();
        assert_eq!(event.start, at(13, 10));
        assert_eq!(event.end, at(17, 15));
        assert_eq!(event.name, "The most important event");
        assert_eq!(event.id, 1);
    }

    #[test]
    fn test_update_keeps_list_order() {
        let mut store = store();
        // Move the first event far past the others; it must stay first.
        store.update(1, at(20, 0), at(21, 0));

        let ids: Vec<_> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let mut store = store();
        let before = store.clone();
        store.update(99, at(10, 0), at(11, 0));
        assert_eq!(store, before);
    }

    #[test]
    fn test_store_round_trips_through_json() {
        let store = store();
        let json = serde_json::to_string(&store).unwrap();
        let back: EventStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
