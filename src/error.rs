use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the profile dataset. The session keeps an empty dataset.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("reading dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing dataset {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset loader stopped before reporting a result")]
    WorkerLost,
}

/// Rejected message composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("subject is empty")]
    MissingSubject,
    #[error("message body is empty")]
    MissingBody,
}
