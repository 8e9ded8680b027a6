use egui::{ecolor::Hsva, Color32};

/// Color in hue/saturation/brightness terms.
///
/// Hue is in degrees `[0, 360]`, saturation and brightness in `[0, 100]` and alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Fully saturated, fully bright color of the given hue.
    pub fn vivid(hue: f32, alpha: f32) -> Self {
        Self::new(hue, 100.0, 100.0, alpha)
    }
}

impl From<Hsb> for Color32 {
    fn from(color: Hsb) -> Self {
        // Hue 360 wraps around to red, same as 0.
        let hue = color.hue.rem_euclid(360.0) / 360.0;
        Hsva::new(
            hue,
            (color.saturation / 100.0).clamp(0.0, 1.0),
            (color.brightness / 100.0).clamp(0.0, 1.0),
            color.alpha.clamp(0.0, 1.0),
        )
        .into()
    }
}
