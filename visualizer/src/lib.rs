pub mod animator;
mod app;
pub mod config;
pub mod errors;
pub mod frame_loop;
pub mod loader;
pub mod parser;
pub mod random;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod types;

pub use app::FlightLinesApp;
pub use config::Config;

const WINDOW_TITLE: &str = "Flight Lines";

/// Opens the visualizer window and blocks until it is closed.
pub fn run(config: Config) -> Result<(), eframe::Error> {
    let logger = config.logger();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([config.canvas.width, config.canvas.height]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(FlightLinesApp::new(&config, logger)))),
    )
}
