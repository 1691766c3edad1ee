use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Default pixel width of one day column.
pub const DEFAULT_COL_WIDTH: f32 = 128.0;

/// Default pixel height of one event row.
pub const DEFAULT_ROW_HEIGHT: f32 = 64.0;

const MINUTES_PER_DAY: f32 = 24.0 * 60.0;

/// The fixed view window of the timeline and the affine mapping between
/// calendar time and horizontal pixels.
///
/// `window_start` is the grid's left edge; each day occupies `col_width`
/// pixels and each event row `row_height` pixels. The mapping is defined for
/// any timestamp: times before the window map to negative x and times past it
/// map beyond `total_width()`. Callers clip; the mapper never clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Left edge of the view window.
    pub window_start: NaiveDateTime,
    /// Number of visible day columns.
    pub day_count: u32,
    /// Pixel width of one day column.
    pub col_width: f32,
    /// Pixel height of one event row.
    pub row_height: f32,
}

impl Default for TimeGrid {
    fn default() -> Self {
        let window_start = NaiveDate::from_ymd_opt(2024, 11, 10)
            .unwrap_or_default()
            .and_time(NaiveTime::MIN);
        Self::new(window_start, 10)
    }
}

impl TimeGrid {
    /// A window of `day_count` days starting at `window_start`, with the
    /// standard column and row sizes.
    pub fn new(window_start: NaiveDateTime, day_count: u32) -> Self {
        Self {
            window_start,
            day_count,
            col_width: DEFAULT_COL_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }

    /// Convert a timestamp to an x-pixel offset from the window's left edge.
    pub fn time_to_x(&self, t: NaiveDateTime) -> f32 {
        let minutes = (t - self.window_start).num_minutes() as f32;
        minutes / MINUTES_PER_DAY * self.col_width
    }

    /// Convert an x-pixel offset back to a timestamp, measured from the
    /// window's left edge. Rounds to the nearest whole minute.
    pub fn x_to_time(&self, x: f32) -> NaiveDateTime {
        self.x_to_time_from(self.window_start, x)
    }

    /// Like [`TimeGrid::x_to_time`] but measured from an arbitrary origin.
    pub fn x_to_time_from(&self, origin: NaiveDateTime, x: f32) -> NaiveDateTime {
        let minutes = (x / self.col_width * MINUTES_PER_DAY).round() as i64;
        origin + Duration::minutes(minutes)
    }

    /// Total width of the grid in pixels.
    pub fn total_width(&self) -> f32 {
        self.col_width * self.day_count as f32
    }

    /// Height of the row area holding `rows` events.
    pub fn content_height(&self, rows: usize) -> f32 {
        self.row_height * rows as f32
    }

    /// Top edge of row `row`, measured from the top of the row area.
    pub fn row_top(&self, row: usize) -> f32 {
        row as f32 * self.row_height
    }

    /// Vertical center of row `row`; connector anchors sit on this line.
    pub fn row_center(&self, row: usize) -> f32 {
        self.row_top(row) + self.row_height / 2.0
    }

    /// The dates of the visible day columns, left to right.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.window_start.date();
        (0..self.day_count).map(move |i| first + Duration::days(i as i64))
    }
}
