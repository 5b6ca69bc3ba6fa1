//! Travel Diary: a single-screen travel log of color-tagged destination cards.

mod model;
mod ui;

use eframe::egui;

use crate::ui::app::App;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Travel Diary",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
