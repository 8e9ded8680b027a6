use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use crate::{errors::LoadError, types::FlightsDocument};

pub type LoadResult = Result<FlightsDocument, LoadError>;

/// Reads and decodes the flights document at `path`.
pub fn load_document(path: &Path) -> LoadResult {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Reads the flights document on a background thread.
///
/// # Errors
/// `LoadError::Io` if the thread could not be started.
pub fn spawn_load(path: PathBuf) -> Result<PendingLoad, LoadError> {
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
        .name("flights-loader".to_string())
        .spawn(move || {
            // The frame loop may be gone already; nothing to do then.
            let _ = sender.send(load_document(&path));
        })?;

    Ok(PendingLoad::from_receiver(receiver))
}

/// Handle to a load in progress. It yields its result once.
pub struct PendingLoad {
    receiver: Receiver<LoadResult>,
}

impl PendingLoad {
    pub fn from_receiver(receiver: Receiver<LoadResult>) -> Self {
        Self { receiver }
    }

    /// A load that has already finished with `result`.
    pub fn completed(result: LoadResult) -> Self {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(result);
        Self::from_receiver(receiver)
    }

    /// Checks for the result without blocking.
    ///
    /// Returns `None` while the loader is still working. A loader that hung up without an
    /// answer is reported as `LoadError::Disconnected`.
    pub fn poll(&self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Disconnected)),
        }
    }

    /// Blocks until the loader answers.
    pub fn wait(self) -> LoadResult {
        self.receiver.recv().map_err(|_| LoadError::Disconnected)?
    }
}
