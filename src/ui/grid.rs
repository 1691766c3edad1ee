use crate::model::{DragController, Event, EventStore, TimeGrid};
use crate::ui::{arrows, theme};
use chrono::NaiveDate;
use egui::{Color32, CursorIcon, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const EVENT_INSET: f32 = theme::EVENT_INSET;
const RESIZER_WIDTH: f32 = theme::RESIZER_WIDTH;

/// Result details from interactions in the grid.
#[derive(Debug, Clone)]
pub struct GridInteraction {
    pub changed: bool,
}

impl Default for GridInteraction {
    fn default() -> Self {
        Self { changed: false }
    }
}

/// Render the day grid with one row per event, the event boxes, and the
/// connectors between consecutive events. Drag input is fed through `drag`,
/// which commits reschedules into `store` as the pointer moves.
pub fn show_grid(
    store: &mut EventStore,
    grid: &TimeGrid,
    drag: &mut DragController,
    ui: &mut Ui,
) -> GridInteraction {
    let mut interaction = GridInteraction::default();

    // A release anywhere ends the session, even when the pointer left the
    // box before the button came up.
    if drag.is_active() && !ui.input(|i| i.pointer.primary_down()) {
        drag.end_drag();
    }

    let events: Vec<Event> = store.events().to_vec();
    let available = ui.available_size();
    let grid_width = grid.total_width().max(available.x);
    let grid_height = HEADER_HEIGHT + grid.content_height(events.len());

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(grid_width, grid_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, theme::BG_PAGE);

            // Day header and row strips first, boxes and connectors on top.
            draw_day_header(&painter, origin, grid, grid_width);
            draw_row_strips(&painter, origin, grid, events.len(), grid_width);
            draw_day_lines(&painter, origin, grid, grid_height.max(available.y));

            for (row, event) in events.iter().enumerate() {
                let box_rect = event_box_rect(origin, grid, event, row);
                draw_event_box(&painter, box_rect, event);

                let box_response = ui.interact(
                    center_region(box_rect),
                    ui.make_persistent_id(("event-box", event.id)),
                    Sense::click_and_drag(),
                );

                if box_response.drag_started() {
                    let ptr_x = ui
                        .input(|i| i.pointer.press_origin())
                        .or_else(|| box_response.interact_pointer_pos())
                        .map(|p| p.x)
                        .unwrap_or(0.0);
                    drag.begin_drag(store, grid, event.id, ptr_x - origin.x);
                }

                if box_response.dragged() {
                    ui.ctx().set_cursor_icon(CursorIcon::Grab);
                    if let Some(pos) = box_response.interact_pointer_pos() {
                        if drag.drag_to(store, grid, pos.x - origin.x) {
                            interaction.changed = true;
                        }
                    }
                }

                if box_response.drag_stopped() {
                    // TODO: hand the rescheduled times to a storage backend
                    // once one is wired up.
                    drag.end_drag();
                }

                let (left_resizer, right_resizer) = resizer_regions(box_rect);
                if ui.rect_contains_pointer(left_resizer) || ui.rect_contains_pointer(right_resizer)
                {
                    // The resize affordance is cursor-only for now.
                    ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
                } else if box_response.hovered() {
                    ui.ctx().set_cursor_icon(CursorIcon::Move);
                }

                if box_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("event-tip", event.id)),
                        |ui| {
                            ui.strong(&event.name);
                            ui.label(format!(
                                "{} → {}",
                                event.start.format("%d/%m/%Y %H:%M"),
                                event.end.format("%d/%m/%Y %H:%M"),
                            ));
                        },
                    );
                }
            }

            // Connectors go last so they ride on top of the boxes, routed
            // from the store so a commit this frame is already reflected.
            let content_origin = Pos2::new(origin.x, origin.y + HEADER_HEIGHT);
            let connectors = arrows::route_connectors(grid, store.events());
            arrows::draw_connectors(&painter, content_origin, &connectors);
        });

    interaction
}

fn draw_day_header(painter: &egui::Painter, origin: Pos2, grid: &TimeGrid, width: f32) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER),
    );

    for (i, day) in grid.days().enumerate() {
        let x = origin.x + (i as f32 + 0.5) * grid.col_width;
        painter.text(
            Pos2::new(x, origin.y + HEADER_HEIGHT / 2.0),
            egui::Align2::CENTER_CENTER,
            day_label(day),
            theme::font_header(),
            theme::TEXT_PRIMARY,
        );
    }
}

fn draw_row_strips(
    painter: &egui::Painter,
    origin: Pos2,
    grid: &TimeGrid,
    rows: usize,
    width: f32,
) {
    for row in 0..rows {
        let top = origin.y + HEADER_HEIGHT + grid.row_top(row);
        painter.rect_filled(
            Rect::from_min_size(
                Pos2::new(origin.x, top),
                Vec2::new(width, grid.row_height),
            ),
            0.0,
            theme::BG_ROW,
        );
        painter.line_segment(
            [
                Pos2::new(origin.x, top + grid.row_height),
                Pos2::new(origin.x + width, top + grid.row_height),
            ],
            Stroke::new(1.0, theme::BORDER),
        );
    }
}

fn draw_day_lines(painter: &egui::Painter, origin: Pos2, grid: &TimeGrid, height: f32) {
    for day in 0..=grid.day_count {
        let x = origin.x + day as f32 * grid.col_width;
        painter.line_segment(
            [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
            Stroke::new(1.0, theme::BORDER),
        );
    }
}

/// Header caption for one day column, e.g. "Sun Nov 10 2024".
fn day_label(day: NaiveDate) -> String {
    day.format("%a %b %d %Y").to_string()
}

/// Screen-space rect of an event's box: start-to-end horizontally, the
/// event's row minus the vertical inset. An event whose end precedes its
/// start yields an inverted rect, which the painter skips.
fn event_box_rect(origin: Pos2, grid: &TimeGrid, event: &Event, row: usize) -> Rect {
    let top = origin.y + HEADER_HEIGHT + grid.row_top(row) + EVENT_INSET;
    Rect::from_min_max(
        Pos2::new(origin.x + grid.time_to_x(event.start), top),
        Pos2::new(
            origin.x + grid.time_to_x(event.end),
            top + grid.row_height - EVENT_INSET * 2.0,
        ),
    )
}

/// The draggable middle of the box, between the two resizer strips.
fn center_region(box_rect: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(box_rect.left() + RESIZER_WIDTH, box_rect.top()),
        Pos2::new(box_rect.right() - RESIZER_WIDTH, box_rect.bottom()),
    )
}

/// The two edge strips of the box.
fn resizer_regions(box_rect: Rect) -> (Rect, Rect) {
    let left = Rect::from_min_size(
        box_rect.left_top(),
        Vec2::new(RESIZER_WIDTH, box_rect.height()),
    );
    let right = Rect::from_min_size(
        Pos2::new(box_rect.right() - RESIZER_WIDTH, box_rect.top()),
        Vec2::new(RESIZER_WIDTH, box_rect.height()),
    );
    (left, right)
}

fn draw_event_box(painter: &egui::Painter, rect: Rect, event: &Event) {
    // A degenerate range yields an empty or inverted rect; paint nothing.
    if !rect.is_positive() {
        return;
    }

    let rounding = Rounding::same(theme::BOX_ROUNDING);
    painter.rect_filled(rect, rounding, event.color);

    // Edge strips signal where resizing will live.
    let (left, right) = resizer_regions(rect);
    painter.rect_filled(
        left,
        Rounding {
            nw: theme::BOX_ROUNDING,
            sw: theme::BOX_ROUNDING,
            ne: 0.0,
            se: 0.0,
        },
        theme::RESIZER_FILL,
    );
    painter.rect_filled(
        right,
        Rounding {
            ne: theme::BOX_ROUNDING,
            se: theme::BOX_ROUNDING,
            nw: 0.0,
            sw: 0.0,
        },
        theme::RESIZER_FILL,
    );

    // Event name, centered and clipped to the box.
    if rect.width() > 30.0 {
        let galley = painter.layout_no_wrap(
            event.name.clone(),
            theme::font_event(),
            theme::TEXT_ON_EVENT,
        );
        let clipped = painter.with_clip_rect(rect);
        let text_pos = Pos2::new(
            rect.center().x - galley.size().x / 2.0,
            rect.center().y - galley.size().y / 2.0,
        );
        clipped.galley(text_pos, galley, Color32::TRANSPARENT);
    }
}
