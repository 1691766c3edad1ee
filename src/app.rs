use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{DragController, Event, EventStore, TimeGrid};
use crate::ui;

/// Main application state.
pub struct TimegridApp {
    pub store: EventStore,
    pub grid: TimeGrid,
    pub drag: DragController,

    // Status message
    pub status_message: String,
}

impl TimegridApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        ui::theme::apply_theme(&cc.egui_ctx);

        Self {
            store: EventStore::new(Self::sample_events()),
            grid: TimeGrid::default(),
            drag: DragController::new(),
            status_message: "Ready".to_string(),
        }
    }

    /// Generate sample events for demonstration. All of them fall inside the
    /// default ten-day window.
    fn sample_events() -> Vec<Event> {
        fn at(day: u32, hour: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 11, day)
                .and_then(|d| d.and_hms_opt(hour, 0, 0))
                .unwrap_or_default()
        }

        let mut e1 = Event::new(1, "The most important event", at(12, 10), at(16, 15));
        e1.color = egui::Color32::from_rgb(66, 133, 244); // Google blue

        let mut e2 = Event::new(2, "Second event", at(10, 18), at(13, 0));
        e2.color = egui::Color32::from_rgb(52, 168, 83); // Green

        let mut e3 = Event::new(3, "Do some programming", at(16, 6), at(17, 22));
        e3.color = egui::Color32::from_rgb(251, 140, 0); // Orange

        vec![e1, e2, e3]
    }
}

impl eframe::App for TimegridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Events: {}", self.store.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_SECONDARY),
                        );
                    });
                });
            });

        // Central panel: the grid
        let grid_frame = egui::Frame::default()
            .fill(ui::theme::BG_PAGE)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(grid_frame).show(ctx, |ui| {
            let interaction = ui::show_grid(&mut self.store, &self.grid, &mut self.drag, ui);
            if interaction.changed {
                let dragged = self.drag.session().map(|session| session.event.id);
                if let Some(event) = dragged.and_then(|id| self.store.get(id)) {
                    self.status_message = format!(
                        "Moved '{}' ({} → {})",
                        event.name,
                        event.start.format("%d/%m/%Y %H:%M"),
                        event.end.format("%d/%m/%Y %H:%M")
                    );
                } else {
                    self.status_message = "Schedule updated".to_string();
                }
            }
        });
    }
}
