use std::time::Duration;

use egui::{Color32, Context, Sense};
use logger::{Color, Logger};
use rand::rngs::ThreadRng;

use crate::{
    config::Config,
    frame_loop::FrameLoop,
    loader::{spawn_load, PendingLoad},
    surface::PainterSurface,
    types::Canvas,
};

/// Window hosting the animation. Every egui frame is one tick of the frame loop.
pub struct FlightLinesApp {
    frame_loop: FrameLoop<ThreadRng>,
    canvas: Canvas,
    repaint_interval: Duration,
}

impl FlightLinesApp {
    /// Starts reading the flights document and prepares an empty scene.
    pub fn new(config: &Config, logger: Logger) -> Self {
        let _ = logger.info(
            &format!("Loading flights from {}", config.data_path.display()),
            Color::Cyan,
            true,
        );

        let pending = match spawn_load(config.data_path.clone()) {
            Ok(pending) => pending,
            Err(e) => PendingLoad::completed(Err(e)),
        };

        Self {
            frame_loop: FrameLoop::new(config.animator(), rand::thread_rng(), logger, pending),
            canvas: config.canvas,
            repaint_interval: config.repaint_interval(),
        }
    }
}

impl eframe::App for FlightLinesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(self.repaint_interval);

        let rimless = egui::Frame {
            fill: Color32::BLACK,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::hover());
                let mut surface = PainterSurface::new(&painter, response.rect, &self.canvas);
                self.frame_loop.tick(&mut surface);
            });
    }
}
