use egui::{emath::Rot2, epaint::TextShape, vec2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::types::{Canvas, Hsb};

const STROKE_WIDTH: f32 = 1.0;
const TEXT_SIZE: f32 = 12.0;

/// Sink for the draw operations of one frame, in canvas coordinates.
pub trait Surface {
    /// Clears the frame to a gray level (0 is black).
    fn background(&mut self, gray: u8);

    fn line(&mut self, from: Pos2, to: Pos2, color: Hsb);

    /// Draws `text` with its baseline starting at `anchor`, rotated clockwise by `angle`
    /// radians around it.
    fn text(&mut self, anchor: Pos2, angle: f32, text: &str, color: Hsb);

    fn filled_circle(&mut self, center: Pos2, diameter: f32, color: Hsb);
}

/// Draws onto an egui painter, fitting the canvas into `rect` with a uniform scale.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    scale: f32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, canvas: &Canvas) -> Self {
        let scale = (rect.width() / canvas.width)
            .min(rect.height() / canvas.height)
            .max(f32::EPSILON);

        Self {
            painter,
            origin: rect.min,
            scale,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.origin + point.to_vec2() * self.scale
    }
}

impl Surface for PainterSurface<'_> {
    fn background(&mut self, gray: u8) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, Color32::from_gray(gray));
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Hsb) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(STROKE_WIDTH * self.scale, Color32::from(color)),
        );
    }

    fn text(&mut self, anchor: Pos2, angle: f32, text: &str, color: Hsb) {
        let color = Color32::from(color);
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(TEXT_SIZE * self.scale),
            color,
        );

        // Galleys are placed by their top-left corner; lift by one row to sit on the baseline.
        let lift = Rot2::from_angle(angle) * vec2(0.0, -galley.size().y);
        let top_left = self.to_screen(anchor) + lift;

        self.painter
            .add(TextShape::new(top_left, galley, color).with_angle(angle));
    }

    fn filled_circle(&mut self, center: Pos2, diameter: f32, color: Hsb) {
        self.painter.circle_filled(
            self.to_screen(center),
            diameter / 2.0 * self.scale,
            Color32::from(color),
        );
    }
}
