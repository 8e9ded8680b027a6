/// Status of a flight as shown on the board.
///
/// Only `Cancelled` and `OnTime` get a marker; every other value is kept verbatim.
#[derive(Debug, PartialEq, Clone)]
pub enum FlightStatus {
    Cancelled,
    OnTime,
    Other(String),
}

impl FlightStatus {
    /// Converts the `FlightStatus` variant to the text it was read from.
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::OnTime => "On time",
            FlightStatus::Other(status) => status,
        }
    }
}

impl From<&str> for FlightStatus {
    fn from(status: &str) -> Self {
        match status {
            "Cancelled" => FlightStatus::Cancelled,
            "On time" => FlightStatus::OnTime,
            other => FlightStatus::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlightStatus;

    #[test]
    fn known_statuses() {
        assert_eq!(FlightStatus::from("Cancelled"), FlightStatus::Cancelled);
        assert_eq!(FlightStatus::from("On time"), FlightStatus::OnTime);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(
            FlightStatus::from("on time"),
            FlightStatus::Other(String::from("on time"))
        );
        assert_eq!(FlightStatus::from("Delayed").as_str(), "Delayed");
    }
}
