use egui::Pos2;

use crate::{
    errors::RecordError,
    parser::{hour_to_hue, parse_hour},
    random::RandomSource,
};

use super::{Canvas, FlightRecord, FlightStatus};

/// A flight drawn as a segment drifting across the canvas.
///
/// Positions are in canvas units. `hue` is derived from the departure hour once and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLine {
    pub start: Pos2,
    pub end: Pos2,
    pub target_start: Pos2,
    pub target_end: Pos2,
    pub flight: String,
    pub destination: String,
    pub gate: String,
    pub hue: f32,
    pub status: FlightStatus,
    pub time: String,
}

impl FlightLine {
    /// Builds the line for a flight entry, with random endpoints and random targets.
    ///
    /// The current endpoints and the targets are two independent draws, so a fresh line
    /// already has somewhere to go.
    pub fn from_record<R: RandomSource + ?Sized>(
        record: &FlightRecord,
        canvas: &Canvas,
        rng: &mut R,
    ) -> Result<Self, RecordError> {
        let destination = record
            .destination
            .first()
            .ok_or(RecordError::MissingDestination)?
            .clone();

        let hue = hour_to_hue(parse_hour(&record.time)?);

        let start = canvas.random_point(rng);
        let end = canvas.random_point(rng);
        let target_start = canvas.random_point(rng);
        let target_end = canvas.random_point(rng);

        Ok(FlightLine {
            start,
            end,
            target_start,
            target_end,
            flight: record.flight_id(),
            destination,
            gate: record.gate.label(),
            hue,
            status: FlightStatus::from(record.status.as_str()),
            time: record.time.clone(),
        })
    }

    pub fn midpoint(&self) -> Pos2 {
        self.start.lerp(self.end, 0.5)
    }

    pub fn start_distance(&self) -> f32 {
        self.start.distance(self.target_start)
    }

    pub fn end_distance(&self) -> f32 {
        self.end.distance(self.target_end)
    }

    /// True only when both endpoints are closer than `threshold` to their targets.
    pub fn has_arrived(&self, threshold: f32) -> bool {
        self.start_distance() < threshold && self.end_distance() < threshold
    }
}
