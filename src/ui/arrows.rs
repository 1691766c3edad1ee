use egui::{pos2, Painter, Pos2, Shape, Stroke};

use crate::model::{Event, TimeGrid};

use super::theme;

/// One orthogonal connector from the end of an event to the start of the
/// next, in grid-local coordinates (x from the window start, y from the
/// first row's top edge).
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Polyline through the elbows: exit, first bend, drop to the row
    /// boundary, run across, drop to the target row, entry.
    pub points: [Pos2; 6],
    /// Filled triangle at the entry point, tip on the target's edge.
    pub head: [Pos2; 3],
}

impl Connector {
    /// Where the connector leaves the source event.
    pub fn start(&self) -> Pos2 {
        self.points[0]
    }

    /// Where the connector meets the target event.
    pub fn end(&self) -> Pos2 {
        self.points[5]
    }
}

/// Route a connector between each consecutive pair of `events`, in list
/// order. Returns nothing for fewer than two events.
pub fn route_connectors(grid: &TimeGrid, events: &[Event]) -> Vec<Connector> {
    events
        .windows(2)
        .enumerate()
        .map(|(row, pair)| route_between(grid, &pair[0], row, &pair[1], row + 1))
        .collect()
}

/// Route one connector from the right edge of `from` (on row `from_row`) to
/// the left edge of `to` (on row `to_row`).
///
/// The path is pure Manhattan: a half-column stub out of the source, a
/// vertical drop to the boundary above the target row, a horizontal run to
/// a half-column short of the target, then down and in. When the target
/// starts left of the source the middle run simply goes leftward.
pub fn route_between(
    grid: &TimeGrid,
    from: &Event,
    from_row: usize,
    to: &Event,
    to_row: usize,
) -> Connector {
    let start = pos2(grid.time_to_x(from.end), grid.row_center(from_row));
    let end = pos2(grid.time_to_x(to.start), grid.row_center(to_row));
    let stub = grid.col_width / 2.0;
    let boundary_y = end.y - grid.row_height / 2.0;

    let points = [
        start,
        pos2(start.x + stub, start.y),
        pos2(start.x + stub, boundary_y),
        pos2(end.x - stub, boundary_y),
        pos2(end.x - stub, end.y),
        end,
    ];
    let half = theme::ARROW_SIZE / 2.0;
    let head = [
        pos2(end.x - theme::ARROW_SIZE, end.y - half),
        end,
        pos2(end.x - theme::ARROW_SIZE, end.y + half),
    ];
    Connector { points, head }
}

/// Paint `connectors` translated by `origin` (the grid content's top-left
/// in screen space). Runs after the boxes so the overlay sits on top.
pub fn draw_connectors(painter: &Painter, origin: Pos2, connectors: &[Connector]) {
    let offset = origin.to_vec2();
    for connector in connectors {
        let line = connector.points.iter().map(|p| *p + offset).collect();
        painter.add(Shape::line(
            line,
            Stroke::new(theme::CONNECTOR_WIDTH, theme::CONNECTOR),
        ));
        let head = connector.head.iter().map(|p| *p + offset).collect();
        painter.add(Shape::convex_polygon(
            head,
            theme::CONNECTOR,
            Stroke::NONE,
        ));
    }
}
