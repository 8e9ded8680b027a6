use egui::{pos2, Pos2};

use crate::random::RandomSource;

/// Logical drawing area. Lines live in these units regardless of window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Draws a point uniformly over `[0, width) x [0, height)`, x first.
    pub fn random_point<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Pos2 {
        let x = rng.next_below(self.width);
        let y = rng.next_below(self.height);
        pos2(x, y)
    }

    pub fn contains(&self, point: Pos2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}
