use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_PAGE: Color32 = Color32::from_rgb(250, 250, 250);
pub const BG_HEADER: Color32 = Color32::from_rgb(229, 229, 229);
pub const BG_ROW: Color32 = Color32::from_rgb(245, 245, 245);
pub const BG_PANEL: Color32 = Color32::from_rgb(236, 236, 238);

pub const BORDER: Color32 = Color32::from_rgb(212, 212, 212);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(38, 38, 38);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(115, 115, 115);
pub const TEXT_ON_EVENT: Color32 = Color32::from_rgb(255, 255, 255);

pub const RESIZER_FILL: Color32 = Color32::from_rgba_premultiplied(64, 64, 64, 64);
pub const CONNECTOR: Color32 = Color32::from_rgb(64, 64, 64);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const HEADER_HEIGHT: f32 = 64.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const EVENT_INSET: f32 = 8.0; // vertical inset so boxes don't touch row edges
pub const RESIZER_WIDTH: f32 = 16.0;
pub const BOX_ROUNDING: f32 = 6.0;
pub const ARROW_SIZE: f32 = 10.0;
pub const CONNECTOR_WIDTH: f32 = 1.5;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_event() -> FontId {
    FontId::proportional(12.5)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PAGE;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = BG_ROW;

    visuals.widgets.noninteractive.bg_fill = BG_PAGE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = BG_PANEL;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = BG_HEADER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = BG_HEADER;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER);

    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
