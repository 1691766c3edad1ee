use chrono::NaiveDateTime;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Identifier for an event. Ids are assigned by whoever seeds the store and
/// are expected to be unique within it.
pub type EventId = u32;

/// A single scheduled event on the timeline.
///
/// `start <= end` is assumed by the geometry but never enforced; an inverted
/// range renders as a degenerate (invisible) box rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Display color for the event box (stored as RGBA).
    #[serde(with = "color_serde")]
    pub color: Color32,
}

impl Event {
    /// Create a new event with the default color.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end,
            color: Color32::from_rgb(70, 130, 180), // Steel blue
        }
    }
}

/// Serde helper for `Color32`.
mod color_serde {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rgba = [color.r(), color.g(), color.b(), color.a()];
        rgba.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rgba: [u8; 4] = Deserialize::deserialize(deserializer)?;
        Ok(Color32::from_rgba_premultiplied(
            rgba[0], rgba[1], rgba[2], rgba[3],
        ))
    }
}
