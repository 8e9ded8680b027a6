use logger::{Color, Logger};

use crate::{
    animator::EasingAnimator,
    loader::{LoadResult, PendingLoad},
    parser::parse_records,
    random::RandomSource,
    renderer::SceneRenderer,
    scene::Scene,
    surface::Surface,
};

/// Drives one animate-then-render pass per frame.
///
/// The flights document arrives through a [`PendingLoad`]. Until it does, frames only show
/// the background. A failed load is logged once and the loop keeps running on an empty
/// scene.
pub struct FrameLoop<R: RandomSource> {
    scene: Scene,
    animator: EasingAnimator,
    renderer: SceneRenderer,
    rng: R,
    logger: Logger,
    pending: Option<PendingLoad>,
}

impl<R: RandomSource> FrameLoop<R> {
    pub fn new(animator: EasingAnimator, rng: R, logger: Logger, pending: PendingLoad) -> Self {
        Self {
            scene: Scene::Loading,
            animator,
            renderer: SceneRenderer::new(),
            rng,
            logger,
            pending: Some(pending),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Runs one frame: picks up a finished load, moves every line, then draws the scene.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.poll_load();

        if let Some(lines) = self.scene.lines_mut() {
            self.animator.tick(lines, &mut self.rng);
        }

        self.renderer.render(&self.scene, surface);
    }

    fn poll_load(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };

        if let Some(result) = pending.poll() {
            self.pending = None;
            self.finish_load(result);
        }
    }

    fn finish_load(&mut self, result: LoadResult) {
        match result {
            Ok(document) => {
                let lines = parse_records(
                    &document.list,
                    self.animator.canvas(),
                    &mut self.rng,
                    &self.logger,
                );
                let _ = self.logger.info(
                    &format!("Loaded {} of {} flights", lines.len(), document.list.len()),
                    Color::Green,
                    true,
                );
                self.scene = Scene::Ready(lines);
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Could not load flights: {}", e), true);
                self.scene = Scene::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use egui::Pos2;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    use crate::{
        errors::LoadError,
        types::{FlightsDocument, Hsb},
    };

    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        backgrounds: usize,
        lines: usize,
        texts: usize,
    }

    impl Surface for CountingSurface {
        fn background(&mut self, _gray: u8) {
            self.backgrounds += 1;
        }

        fn line(&mut self, _from: Pos2, _to: Pos2, _color: Hsb) {
            self.lines += 1;
        }

        fn text(&mut self, _anchor: Pos2, _angle: f32, _text: &str, _color: Hsb) {
            self.texts += 1;
        }

        fn filled_circle(&mut self, _center: Pos2, _diameter: f32, _color: Hsb) {}
    }

    fn document(count: usize) -> FlightsDocument {
        FlightsDocument {
            list: (0..count)
                .map(|i| {
                    json!({
                        "flight": format!("F{}", i),
                        "destination": ["Lisbon"],
                        "status": "Delayed",
                        "time": "09:45",
                        "gate": i
                    })
                })
                .collect(),
        }
    }

    fn frame_loop(pending: PendingLoad) -> FrameLoop<StdRng> {
        FrameLoop::new(
            EasingAnimator::default(),
            StdRng::seed_from_u64(5),
            Logger::console(),
            pending,
        )
    }

    #[test]
    fn frames_before_load_only_clear() {
        let (sender, receiver) = mpsc::channel();
        let mut frames = frame_loop(PendingLoad::from_receiver(receiver));

        let mut surface = CountingSurface::default();
        frames.tick(&mut surface);
        frames.tick(&mut surface);

        assert_eq!(surface.backgrounds, 2);
        assert_eq!(surface.lines, 0);
        assert_eq!(frames.scene(), &Scene::Loading);

        sender.send(Ok(document(3))).unwrap();
        let mut surface = CountingSurface::default();
        frames.tick(&mut surface);

        assert_eq!(surface.backgrounds, 1);
        assert_eq!(surface.lines, 3);
        assert_eq!(surface.texts, 6);
        assert_eq!(frames.scene().lines().len(), 3);
    }

    #[test]
    fn lines_move_every_frame() {
        let mut frames = frame_loop(PendingLoad::completed(Ok(document(1))));
        let mut surface = CountingSurface::default();

        frames.tick(&mut surface);
        let first = frames.scene().lines()[0].clone();
        frames.tick(&mut surface);
        let second = &frames.scene().lines()[0];

        assert!(second.start_distance() < first.start_distance());
        assert!(second.end_distance() < first.end_distance());
        assert_eq!(second.hue, first.hue);
    }

    #[test]
    fn failed_load_keeps_drawing_background() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "data.json");
        let mut frames = frame_loop(PendingLoad::completed(Err(LoadError::Io(error))));

        for _ in 0..3 {
            let mut surface = CountingSurface::default();
            frames.tick(&mut surface);
            assert_eq!(surface.backgrounds, 1);
            assert_eq!(surface.lines, 0);
        }
        assert_eq!(frames.scene(), &Scene::Failed);
    }

    #[test]
    fn vanished_loader_counts_as_failure() {
        let (sender, receiver) = mpsc::channel::<LoadResult>();
        drop(sender);
        let mut frames = frame_loop(PendingLoad::from_receiver(receiver));

        frames.tick(&mut CountingSurface::default());

        assert_eq!(frames.scene(), &Scene::Failed);
    }
}
