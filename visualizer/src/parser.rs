use logger::Logger;
use serde::Deserialize;

use crate::{
    errors::RecordError,
    random::RandomSource,
    types::{Canvas, FlightLine, FlightRecord},
};

const HOURS_PER_DAY: u32 = 24;
const FULL_TURN_DEGREES: f32 = 360.0;

/// Reads the hour from a `HH:MM` time, or from a bare `HH`.
///
/// # Errors
/// `RecordError::InvalidTime` when the part before the first `:` is not an integer between
/// 0 and 24 inclusive.
pub fn parse_hour(time: &str) -> Result<u32, RecordError> {
    let hour_part = time.split(':').next().unwrap_or_default().trim();

    match hour_part.parse::<u32>() {
        Ok(hour) if hour <= HOURS_PER_DAY => Ok(hour),
        _ => Err(RecordError::InvalidTime(time.to_string())),
    }
}

/// Maps an hour in `[0, 24]` linearly onto a hue in degrees: midnight is red, noon is cyan.
pub fn hour_to_hue(hour: u32) -> f32 {
    hour as f32 * FULL_TURN_DEGREES / HOURS_PER_DAY as f32
}

/// Turns the raw entries of the flights document into lines, in input order.
///
/// Entries that cannot be read are skipped with a warning; the rest are kept.
pub fn parse_records<R: RandomSource + ?Sized>(
    entries: &[serde_json::Value],
    canvas: &Canvas,
    rng: &mut R,
    logger: &Logger,
) -> Vec<FlightLine> {
    let mut lines = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry, canvas, rng) {
            Ok(line) => lines.push(line),
            Err(e) => {
                let _ = logger.warn(&format!("Skipping flight #{}: {}", index, e), true);
            }
        }
    }

    lines
}

fn parse_entry<R: RandomSource + ?Sized>(
    entry: &serde_json::Value,
    canvas: &Canvas,
    rng: &mut R,
) -> Result<FlightLine, RecordError> {
    let record = FlightRecord::deserialize(entry)?;
    FlightLine::from_record(&record, canvas, rng)
}
