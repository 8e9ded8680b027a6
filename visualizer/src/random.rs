use rand::Rng;

/// Source of the uniform draws used for initial positions and retargeting.
///
/// Every `rand::Rng` is a source, so production code can hand in `thread_rng()` and tests a
/// seeded `StdRng` or a scripted sequence.
pub trait RandomSource {
    /// Returns a value in `[0, upper)`, or `0.0` when `upper` is not positive.
    fn next_below(&mut self, upper: f32) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_below(&mut self, upper: f32) -> f32 {
        if upper <= 0.0 {
            return 0.0;
        }
        self.gen_range(0.0..upper)
    }
}
