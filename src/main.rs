#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting timegrid");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1340.0, 480.0])
            .with_min_inner_size([640.0, 320.0])
            .with_title("Timegrid"),
        ..Default::default()
    };

    eframe::run_native(
        "Timegrid",
        options,
        Box::new(|cc| Ok(Box::new(app::TimegridApp::new(cc)))),
    )
}
