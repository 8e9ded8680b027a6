use crate::types::FlightLine;

/// Everything the frame loop animates and draws.
///
/// Lines only exist once the flights document has been read. Until then, or if reading it
/// failed, the scene is empty and only the background gets painted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scene {
    #[default]
    Loading,
    Ready(Vec<FlightLine>),
    Failed,
}

impl Scene {
    pub fn is_ready(&self) -> bool {
        matches!(self, Scene::Ready(_))
    }

    /// The lines to draw, in input order. Empty unless the scene is ready.
    pub fn lines(&self) -> &[FlightLine] {
        match self {
            Scene::Ready(lines) => lines,
            Scene::Loading | Scene::Failed => &[],
        }
    }

    pub fn lines_mut(&mut self) -> Option<&mut [FlightLine]> {
        match self {
            Scene::Ready(lines) => Some(lines),
            Scene::Loading | Scene::Failed => None,
        }
    }
}
