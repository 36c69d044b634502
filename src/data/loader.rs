use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::model::Profile;
use crate::error::DatasetLoadError;

// ---------------------------------------------------------------------------
// Synchronous entry-points
// ---------------------------------------------------------------------------

/// Parse the dataset document.
///
/// Expected schema: a top-level array of profile records.
///
/// ```json
/// [
///   {
///     "id": 1,
///     "nome": "Ana Rocha",
///     "cargo": "Tech Lead",
///     "localizacao": "Recife/PE",
///     "area": "Tecnologia",
///     "habilidadesTecnicas": ["React", "TypeScript"],
///     ...
///   },
///   ...
/// ]
/// ```
pub fn parse_profiles(text: &str) -> Result<Vec<Profile>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse a dataset file.
pub fn load_file(path: &Path) -> Result<Vec<Profile>, DatasetLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profiles(&text).map_err(|source| DatasetLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Background loader with generation guard
// ---------------------------------------------------------------------------

/// Result of one load request.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<Vec<Profile>, DatasetLoadError>,
}

/// Called from the worker thread once a result has been queued.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Runs dataset loads off the UI thread.
///
/// Each request gets a new generation number. Only the result of the most
/// recent request is ever handed out; results of superseded requests are
/// dropped when they arrive.
pub struct DatasetLoader {
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    latest: u64,
    pending: bool,
    worker: Option<JoinHandle<()>>,
    notify: Option<Notify>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            latest: 0,
            pending: false,
            worker: None,
            notify: None,
        }
    }
}

impl DatasetLoader {
    /// Loader that calls `notify` whenever a worker finishes.
    pub fn with_notify(notify: Notify) -> Self {
        Self {
            notify: Some(notify),
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start loading `path` on a worker thread and return its generation.
    pub fn request(&mut self, path: &Path) -> u64 {
        self.latest += 1;
        self.pending = true;
        let generation = self.latest;
        let path = path.to_path_buf();
        log::info!("Loading dataset {} (generation {generation})", path.display());

        let tx = self.tx.clone();
        let notify = self.notify.clone();
        let worker_path = path.clone();
        let spawned = thread::Builder::new()
            .name(format!("dataset-loader-{generation}"))
            .spawn(move || {
                let result = load_file(&worker_path);
                // The receiver only goes away with the loader itself.
                let _ = tx.send(LoadOutcome {
                    generation,
                    path: worker_path,
                    result,
                });
                if let Some(notify) = notify {
                    notify();
                }
            });

        match spawned {
            Ok(handle) => self.worker = Some(handle),
            Err(source) => {
                self.worker = None;
                let _ = self.tx.send(LoadOutcome {
                    generation,
                    path: path.clone(),
                    result: Err(DatasetLoadError::Io { path, source }),
                });
            }
        }
        generation
    }

    /// Non-blocking check for the latest request's result.
    ///
    /// Returns `Some` exactly once per request that is still current.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        if !self.pending {
            // Still drain so stale senders do not pile up.
            while let Ok(stale) = self.rx.try_recv() {
                self.discard(stale);
            }
            return None;
        }

        // Checked before draining: a worker that finished without a message
        // in the queue has died.
        let worker_done = self.worker.as_ref().is_some_and(|w| w.is_finished());

        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation == self.latest {
                self.finish();
                return Some(outcome);
            }
            self.discard(outcome);
        }

        if worker_done {
            log::error!("Dataset loader for generation {} exited without a result", self.latest);
            let path = PathBuf::new();
            self.finish();
            return Some(LoadOutcome {
                generation: self.latest,
                path,
                result: Err(DatasetLoadError::WorkerLost),
            });
        }
        None
    }

    fn finish(&mut self) {
        self.pending = false;
        self.worker = None;
    }

    fn discard(&self, outcome: LoadOutcome) {
        log::warn!(
            "Discarding stale dataset result from {} (generation {}, latest {})",
            outcome.path.display(),
            outcome.generation,
            self.latest
        );
    }
}
