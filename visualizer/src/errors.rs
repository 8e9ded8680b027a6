use std::fmt::{self, Display};

/// Errors raised while reading the flights document as a whole.
///
/// Any of these leaves the scene empty: the visualization keeps running and only draws the
/// background.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not a JSON object with a `list` array.
    Json(serde_json::Error),
    /// The loading thread ended without reporting a result.
    Disconnected,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "[Io]: [Could not read flights document: {}]", e),
            LoadError::Json(e) => write!(f, "[Json]: [Invalid flights document: {}]", e),
            LoadError::Disconnected => {
                write!(f, "[Disconnected]: [Loader stopped before sending a result]")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Disconnected => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

/// Errors for a single flight entry. The entry is skipped and the rest still load.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    /// A required field is missing or has the wrong JSON type.
    Malformed(String),
    /// The destination list is empty.
    MissingDestination,
    /// The hour before the first `:` is not an integer in `[0, 24]`.
    InvalidTime(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Malformed(msg) => write!(f, "[Malformed]: [{}]", msg),
            RecordError::MissingDestination => {
                write!(f, "[MissingDestination]: [Flight has no destinations]")
            }
            RecordError::InvalidTime(time) => {
                write!(f, "[InvalidTime]: [Cannot read an hour from '{}']", time)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Malformed(err.to_string())
    }
}
