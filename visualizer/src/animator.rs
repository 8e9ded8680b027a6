use crate::{
    random::RandomSource,
    types::{Canvas, FlightLine},
};

pub const DEFAULT_EASE_FACTOR: f32 = 0.01;
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 1.0;

/// Eases every line toward its targets and hands out new targets on arrival.
///
/// Each tick moves every coordinate a fixed fraction of the way to its target, so the
/// distance shrinks geometrically and never reaches zero on its own. Once both endpoints are
/// within `threshold` of their targets, both targets are redrawn anywhere on the canvas.
#[derive(Debug, Clone)]
pub struct EasingAnimator {
    canvas: Canvas,
    factor: f32,
    threshold: f32,
}

impl EasingAnimator {
    pub fn new(canvas: Canvas, factor: f32, threshold: f32) -> Self {
        Self {
            canvas,
            factor,
            threshold,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Advances all lines one step, in order. Returns how many of them were retargeted.
    pub fn tick<R: RandomSource + ?Sized>(&self, lines: &mut [FlightLine], rng: &mut R) -> usize {
        let mut retargets = 0;
        for line in lines.iter_mut() {
            if self.step(line, rng) {
                retargets += 1;
            }
        }
        retargets
    }

    /// Advances one line a single step. Returns `true` if it got new targets.
    pub fn step<R: RandomSource + ?Sized>(&self, line: &mut FlightLine, rng: &mut R) -> bool {
        line.start.x = ease(line.start.x, line.target_start.x, self.factor);
        line.start.y = ease(line.start.y, line.target_start.y, self.factor);
        line.end.x = ease(line.end.x, line.target_end.x, self.factor);
        line.end.y = ease(line.end.y, line.target_end.y, self.factor);

        if !line.has_arrived(self.threshold) {
            return false;
        }

        line.target_start = self.canvas.random_point(rng);
        line.target_end = self.canvas.random_point(rng);
        true
    }
}

impl Default for EasingAnimator {
    fn default() -> Self {
        Self::new(
            Canvas::new(800.0, 800.0),
            DEFAULT_EASE_FACTOR,
            DEFAULT_ARRIVAL_THRESHOLD,
        )
    }
}

fn ease(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
