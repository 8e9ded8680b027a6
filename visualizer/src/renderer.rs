use std::f32::consts::FRAC_PI_4;

use egui::{emath::Rot2, vec2, Pos2, Vec2};

use crate::{
    scene::Scene,
    surface::Surface,
    types::{FlightLine, FlightStatus, Hsb},
};

const BACKGROUND_GRAY: u8 = 0;
const STROKE_ALPHA: f32 = 0.7;
const LABEL_ANGLE: f32 = FRAC_PI_4;
const DESTINATION_OFFSET: Vec2 = vec2(0.0, -10.0);
const GATE_OFFSET: Vec2 = vec2(0.0, 10.0);
const CROSS_HALF_SIZE: f32 = 5.0;
const DOT_DIAMETER: f32 = 10.0;

/// Paints the scene: each flight as a line, two slanted labels and a status marker.
///
/// Rendering only reads the scene; positions are owned by the animator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Clears the frame and draws every line of a ready scene, in order.
    pub fn render<S: Surface + ?Sized>(&self, scene: &Scene, surface: &mut S) {
        surface.background(BACKGROUND_GRAY);

        for line in scene.lines() {
            self.draw_flight(line, surface);
        }
    }

    fn draw_flight<S: Surface + ?Sized>(&self, line: &FlightLine, surface: &mut S) {
        surface.line(line.start, line.end, Hsb::vivid(line.hue, STROKE_ALPHA));

        let fill = Hsb::vivid(line.hue, 1.0);
        let mid = line.midpoint();
        let rotation = Rot2::from_angle(LABEL_ANGLE);

        surface.text(
            mid + rotation * DESTINATION_OFFSET,
            LABEL_ANGLE,
            &line.destination,
            fill,
        );
        surface.text(
            mid + rotation * GATE_OFFSET,
            LABEL_ANGLE,
            &format!("Gate: {}", line.gate),
            fill,
        );

        draw_marker(&line.status, mid, fill, surface);
    }
}

fn draw_marker<S: Surface + ?Sized>(
    status: &FlightStatus,
    mid: Pos2,
    color: Hsb,
    surface: &mut S,
) {
    match status {
        FlightStatus::Cancelled => {
            let d = CROSS_HALF_SIZE;
            surface.line(mid + vec2(-d, -d), mid + vec2(d, d), color);
            surface.line(mid + vec2(d, -d), mid + vec2(-d, d), color);
        }
        FlightStatus::OnTime => surface.filled_circle(mid, DOT_DIAMETER, color),
        FlightStatus::Other(_) => {}
    }
}
