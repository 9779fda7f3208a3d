use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list {path:?} does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("error reading word list {path:?}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordListError {
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound { path },
            _ => Self::ReadFailure { path, source },
        }
    }
}
