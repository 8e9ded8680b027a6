use std::{path::PathBuf, time::Duration};

use logger::Logger;

use crate::{
    animator::{EasingAnimator, DEFAULT_ARRIVAL_THRESHOLD, DEFAULT_EASE_FACTOR},
    types::Canvas,
};

const CANVAS_SIZE: f32 = 800.0;
const DATA_FILE: &str = "data.json";
const FRAMES_PER_SECOND: u32 = 60;
const LOG_NAME: &str = "flight_lines";

/// Settings for one run of the visualizer.
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas: Canvas,
    pub data_path: PathBuf,
    pub ease_factor: f32,
    pub arrival_threshold: f32,
    pub frames_per_second: u32,
    pub log_dir: PathBuf,
    pub log_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(CANVAS_SIZE, CANVAS_SIZE),
            data_path: PathBuf::from(DATA_FILE),
            ease_factor: DEFAULT_EASE_FACTOR,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
            frames_per_second: FRAMES_PER_SECOND,
            log_dir: PathBuf::from("."),
            log_name: LOG_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn animator(&self) -> EasingAnimator {
        EasingAnimator::new(self.canvas, self.ease_factor, self.arrival_threshold)
    }

    /// Time between frames. A zero frame rate is treated as one frame per second.
    pub fn repaint_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frames_per_second.max(1)))
    }

    /// File logger in `log_dir`, or a console logger if the file cannot be created.
    pub fn logger(&self) -> Logger {
        match Logger::new(&self.log_dir, &self.log_name) {
            Ok(logger) => logger,
            Err(e) => {
                let logger = Logger::console();
                let _ = logger.warn(&format!("Logging to console only: {}", e), true);
                logger
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.canvas, Canvas::new(800.0, 800.0));
        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.ease_factor, 0.01);
        assert_eq!(config.arrival_threshold, 1.0);
        assert_eq!(config.repaint_interval(), Duration::from_millis(16));
    }

    #[test]
    fn zero_frame_rate_does_not_divide_by_zero() {
        let config = Config {
            frames_per_second: 0,
            ..Default::default()
        };
        assert_eq!(config.repaint_interval(), Duration::from_secs(1));
    }

    #[test]
    fn unusable_log_dir_falls_back_to_console() {
        let config = Config {
            log_dir: PathBuf::from("/nonexistent/flight_lines_logs"),
            ..Default::default()
        };
        assert!(config.logger().log_file().is_none());
    }
}
