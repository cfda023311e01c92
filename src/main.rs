mod app;
mod color;
mod state;
mod ui;

use app::RealityCheckApp;
use eframe::egui;
use reality_check::data::loader::configured_tables;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let tables = configured_tables();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reality Check Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(RealityCheckApp::new(AppState::new(tables))))),
    )
}
