use chrono::NaiveDateTime;

use super::event::{Event, EventId};
use super::store::EventStore;
use super::timeline::TimeGrid;

/// Snapshot taken at pointer-down: the grid time under the pointer and the
/// dragged event as it stood. Later moves are always measured against this,
/// never against the store's already-moved values, so repeated commits
/// cannot drift.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Grid time under the pointer when the drag began.
    pub anchor: NaiveDateTime,
    /// The dragged event as it was at pointer-down.
    pub event: Event,
}

/// Tracks the single in-progress drag, if any.
///
/// Two states: idle (no session) and anchored. `begin_drag` arms the
/// controller, every `drag_to` recomputes the full delta from the anchor and
/// commits it, `end_drag` disarms. Inputs that don't line up with an armed
/// session — an unknown id, a move without a press — are silent no-ops.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is live.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pointer-down at `grid_x` (pixels from the grid's left edge) on the
    /// event with `id`. An unknown id leaves the controller idle.
    pub fn begin_drag(&mut self, store: &EventStore, grid: &TimeGrid, id: EventId, grid_x: f32) {
        let Some(event) = store.get(id) else {
            return;
        };
        self.session = Some(DragSession {
            anchor: grid.x_to_time(grid_x),
            event: event.clone(),
        });
    }

    /// Pointer-move to `grid_x` while anchored: commit the event shifted by
    /// the time the pointer has covered since the anchor. Returns whether a
    /// commit happened.
    pub fn drag_to(&self, store: &mut EventStore, grid: &TimeGrid, grid_x: f32) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let delta = grid.x_to_time(grid_x) - session.anchor;
        let start = session.event.start + delta;
        let end = session.event.end + delta;
        log::debug!(
            "drag event {}: {:+} min, {} -> {}",
            session.event.id,
            delta.num_minutes(),
            start,
            end
        );
        store.update(session.event.id, start, end);
        true
    }

    /// Pointer-up: drop the session. The last committed move stands; handing
    /// the result to durable storage is the host's concern, not ours.
    pub fn end_drag(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

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

    // With the default grid (window at Nov 10, 128 px/day), x = 448.0 is
    // Nov 13 12:00 and x = 576.0 is Nov 14 12:00.
    const DAY13_NOON_X: f32 = 448.0;
    const DAY14_NOON_X: f32 = 576.0;

    #[test]
    fn test_drag_shifts_event_by_pointer_delta() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        assert!(drag.is_active());

        assert!(drag.drag_to(&mut store, &grid, DAY14_NOON_X));

        let event = store.get(1).unwrap();
        assert_eq!(event.start, at(13, 10));
        assert_eq!(event.end, at(17, 15));
    }

    #[test]
    fn test_intermediate_moves_do_not_drift() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        // Wander over in single-pixel steps; only the final position counts.
        let mut x = DAY13_NOON_X;
        while x < DAY14_NOON_X {
            drag.drag_to(&mut store, &grid, x);
            x += 1.0;
        }
        drag.drag_to(&mut store, &grid, DAY14_NOON_X);

        let event = store.get(1).unwrap();
        assert_eq!(event.start, at(13, 10));
        assert_eq!(event.end, at(17, 15));
    }

    #[test]
    fn test_delta_is_measured_from_anchor_not_last_commit() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        drag.drag_to(&mut store, &grid, DAY14_NOON_X);
        drag.drag_to(&mut store, &grid, 1000.0);
        // Coming back to the anchor must restore the original times exactly.
        drag.drag_to(&mut store, &grid, DAY13_NOON_X);

        let event = store.get(1).unwrap();
        assert_eq!(event.start, at(12, 10));
        assert_eq!(event.end, at(16, 15));
    }

    #[test]
    fn test_leftward_drag_moves_event_earlier() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY14_NOON_X);
        drag.drag_to(&mut store, &grid, DAY13_NOON_X);

        let event = store.get(1).unwrap();
        assert_eq!(event.start, at(11, 10));
        assert_eq!(event.end, at(15, 15));
    }

    #[test]
    fn test_move_without_press_is_a_noop() {
        let grid = TimeGrid::default();
        let mut store = store();
        let before = store.clone();
        let drag = DragController::new();

        assert!(!drag.drag_to(&mut store, &grid, DAY14_NOON_X));
        assert_eq!(store, before);
    }

    #[test]
    fn test_unknown_id_does_not_arm_the_controller() {
        let grid = TimeGrid::default();
        let mut store = store();
        let before = store.clone();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 99, DAY13_NOON_X);
        assert!(!drag.is_active());
        assert!(!drag.drag_to(&mut store, &grid, DAY14_NOON_X));
        assert_eq!(store, before);
    }

    #[test]
    fn test_release_clears_the_session() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        drag.drag_to(&mut store, &grid, DAY14_NOON_X);
        drag.end_drag();
        assert!(!drag.is_active());

        // The last commit stands, and further moves change nothing.
        let after_release = store.clone();
        assert!(!drag.drag_to(&mut store, &grid, 1000.0));
        assert_eq!(store, after_release);
    }

    #[test]
    fn test_other_events_are_untouched() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        drag.drag_to(&mut store, &grid, DAY14_NOON_X);

        assert_eq!(store.get(2).unwrap().start, at(10, 18));
        assert_eq!(store.get(2).unwrap().end, at(13, 0));
        assert_eq!(store.get(3).unwrap().start, at(16, 6));
        assert_eq!(store.get(3).unwrap().end, at(17, 22));
        let ids: Vec<_> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_commit_preserves_name_and_color() {
        let grid = TimeGrid::default();
        let mut store = store();
        let expected_color = store.get(1).unwrap().color;
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        drag.drag_to(&mut store, &grid, DAY14_NOON_X);

        let event = store.get(1).unwrap();
        assert_eq!(event.name, "The most important event");
        assert_eq!(event.color, expected_color);
    }

    #[test]
    fn test_new_press_replaces_previous_session() {
        let grid = TimeGrid::default();
        let mut store = store();
        let mut drag = DragController::new();

        drag.begin_drag(&store, &grid, 1, DAY13_NOON_X);
        drag.end_drag();
        drag.begin_drag(&store, &grid, 2, DAY13_NOON_X);

        drag.drag_to(&mut store, &grid, DAY14_NOON_X);
        // Only event 2 moves under the new session.
        assert_eq!(store.get(1).unwrap().start, at(12, 10));
        assert_eq!(store.get(2).unwrap().start, at(11, 18));
    }
}
