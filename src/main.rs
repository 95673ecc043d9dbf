//! Caro GUI
//!
//! Play Caro against the engine or against another player on the same machine.

use caro::ui::CaroApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(|cc| Ok(Box::new(CaroApp::new(cc)))),
    )
}
