mod canvas;
pub use canvas::Canvas;

mod color;
pub use color::Hsb;

mod flight_status;
pub use flight_status::FlightStatus;

mod flight_record;
pub use flight_record::{FlightRecord, FlightsDocument, Gate};

mod flight_line;
pub use flight_line::FlightLine;
