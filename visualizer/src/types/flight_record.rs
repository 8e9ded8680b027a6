use serde::Deserialize;

/// The flights document: `{ "list": [ ... ] }`.
///
/// Entries are kept as raw JSON so that one bad entry does not reject the whole file.
#[derive(Debug, Deserialize)]
pub struct FlightsDocument {
    pub list: Vec<serde_json::Value>,
}

/// Gate identifiers come either as text (`"G1"`) or as plain numbers (`12`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Gate {
    Text(String),
    Number(serde_json::Number),
}

impl Gate {
    pub fn label(&self) -> String {
        match self {
            Gate::Text(gate) => gate.clone(),
            Gate::Number(gate) => gate.to_string(),
        }
    }
}

/// One entry of the flights document.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    #[serde(default)]
    pub flight: Option<serde_json::Value>,
    pub destination: Vec<String>,
    pub status: String,
    pub time: String,
    pub gate: Gate,
}

impl FlightRecord {
    /// Flight identifier for diagnostics, or an empty string if the entry has none.
    pub fn flight_id(&self) -> String {
        match &self.flight {
            Some(serde_json::Value::String(id)) => id.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}
